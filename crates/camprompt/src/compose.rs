//! Phrase composition: pan/tilt clauses, the camera readout, and sentence
//! assembly.

use camprompt_core::{geometry, CameraConfig, DVec3};

/// Lateral/depth offsets smaller than this don't affect the pan wording.
const OFFSET_EPS: f64 = 0.1;

/// Pan/position clause for a camera at `position` looking at `target`.
///
/// `None` means the camera is in a natural forward framing and no wording is
/// needed. A camera directly above or below the target short-circuits to
/// "above object" / "below object".
pub(crate) fn pan_clause(position: DVec3, target: DVec3) -> Option<String> {
    let d = position - target;

    if geometry::horizontal_distance(position, target) < 0.001 {
        return Some(if d.y > 0.0 { "above object" } else { "below object" }.to_string());
    }

    let angle = geometry::bearing_deg(position, target) as i64;

    let directly_front = (angle.abs() < 2 || (angle - 360).abs() < 2) && d.z > OFFSET_EPS;
    if directly_front {
        return None;
    }

    if d.z < -OFFSET_EPS {
        if d.x.abs() < OFFSET_EPS {
            return Some("looking from behind".to_string());
        }
        return Some(if (90..=180).contains(&angle) {
            format!("Pan the camera {angle} degrees to the right-back side")
        } else if (181..=270).contains(&angle) {
            format!("Pan the camera {angle} degrees to the left-back side")
        } else {
            format!("looking from behind at {angle} degree")
        });
    }

    if d.x.abs() < OFFSET_EPS {
        if d.z > OFFSET_EPS {
            return None;
        }
        return Some("looking from behind".to_string());
    }

    if d.x > OFFSET_EPS {
        return Some(format!("Pan the camera {angle} degrees to the right"));
    }
    if d.x < -OFFSET_EPS {
        let left = if angle >= 270 { 360 - angle } else { angle };
        return Some(format!("Pan the camera {left} degrees to the left"));
    }

    // Offsets sitting exactly on the threshold produce no wording.
    None
}

/// Tilt clause, emitted only outside the eye-level tolerance band.
pub(crate) fn tilt_clause(pitch_deg: f64, cfg: &CameraConfig) -> Option<String> {
    if pitch_deg.abs() <= cfg.eye_level_tolerance_deg {
        return None;
    }
    let magnitude = pitch_deg.abs() as i64;
    Some(if pitch_deg > 0.0 {
        format!("tilt down at {magnitude} degree")
    } else {
        format!("tilt up at {magnitude} degree")
    })
}

/// The numeric camera parameters echoed after the shot name.
#[derive(Debug, Clone, Copy)]
pub struct CameraReadout {
    /// Camera-to-target distance in meters.
    pub distance_m: f64,
    /// Focal length in millimeters, when available.
    pub focal_length_mm: Option<f64>,
    /// Field of view in degrees, when available.
    pub fov_deg: Option<f64>,
}

impl CameraReadout {
    /// Renders the parenthesized readout, omitting unavailable fields.
    #[must_use]
    pub fn clause(&self) -> String {
        let mut parts = vec![format!("camera distance {:.1} m", self.distance_m)];
        if let Some(focal) = self.focal_length_mm {
            parts.push(format!("{}mm", focal as i64));
        }
        if let Some(fov) = self.fov_deg {
            let fov = fov as i64;
            if fov != 0 {
                parts.push(format!("FOV {fov}°"));
            }
        }
        format!("({})", parts.join(" "))
    }
}

/// Assembles the final prompt from its clauses.
///
/// Movement clauses join with " and "; the angle and shot names join with a
/// space; a movement clause takes the angle/shot description as a trailing
/// ", ..." segment, otherwise the description stands alone with a period.
/// The readout and any custom text follow as separate space-joined fragments.
pub(crate) fn assemble(
    pan: Option<&str>,
    tilt: Option<&str>,
    angle_label: Option<&str>,
    shot_label: Option<&str>,
    readout: Option<&str>,
    custom: &str,
) -> String {
    let movement: Vec<&str> = [pan, tilt].into_iter().flatten().collect();
    let angle_shot: Vec<&str> = [angle_label, shot_label].into_iter().flatten().collect();

    let mut fragments: Vec<String> = Vec::new();

    if movement.is_empty() {
        if !angle_shot.is_empty() {
            fragments.push(format!("{}.", angle_shot.join(" ")));
        }
    } else {
        let movement = movement.join(" and ");
        if angle_shot.is_empty() {
            fragments.push(format!("{movement}."));
        } else {
            fragments.push(format!("{movement}, {}", angle_shot.join(" ")));
        }
    }

    if let Some(readout) = readout {
        fragments.push(readout.to_string());
    }

    let custom = custom.trim();
    if !custom.is_empty() {
        fragments.push(custom.to_string());
    }

    fragments.join(" ")
}
