//! Shot-framing classification.

use camprompt_core::{optics, CameraConfig};

use crate::tables::{ShotCategory, FRAMING_TABLE, SHOT_TABLE};

// Last-resort distance thresholds (meters), strict `<` comparisons.
const EXTREME_CLOSE_UP_MAX_M: f64 = 0.6;
const CLOSE_UP_MAX_M: f64 = 1.2;
const MEDIUM_SHOT_MAX_M: f64 = 3.0;
const FULL_SHOT_MAX_M: f64 = 5.0;
const WIDE_SHOT_MAX_M: f64 = 10.0;

/// Everything the shot classifier may consult.
///
/// `focal_length_mm` is the explicit lens value; when absent, a focal length
/// is estimated from the FOV for the tiers that need one.
#[derive(Debug, Clone, Copy)]
pub struct ShotInputs {
    /// Camera-to-subject distance in meters.
    pub distance_m: f64,
    /// Field of view in degrees, if known.
    pub fov_deg: Option<f64>,
    /// Explicit focal length in millimeters, if known.
    pub focal_length_mm: Option<f64>,
    /// Real-world subject size in meters, if known.
    pub object_scale_m: Option<f64>,
}

/// Classifies the framing of a shot.
///
/// Prioritized fallback chain; earlier tiers use richer information:
/// 1. framing percentage (needs object scale and a focal length),
/// 2. distance against the shot table,
/// 3. FOV against the shot table,
/// 4. focal length against the shot table,
/// 5. bare distance thresholds.
#[must_use]
pub fn classify_shot(inputs: &ShotInputs, cfg: &CameraConfig) -> ShotCategory {
    let effective_focal = inputs
        .focal_length_mm
        .or_else(|| inputs.fov_deg.and_then(optics::estimate_focal_from_fov));

    if let (Some(scale), Some(focal)) = (inputs.object_scale_m, effective_focal) {
        if let Some(category) =
            framing_shot(scale, inputs.distance_m, focal, cfg.sensor_height_mm)
        {
            log::debug!("shot {:?} via framing percentage", category);
            return category;
        }
    }

    for row in &SHOT_TABLE {
        let [lo, hi] = row.distance_m;
        if lo <= inputs.distance_m && inputs.distance_m <= hi {
            return row.category;
        }
    }

    if let Some(fov) = inputs.fov_deg {
        for row in &SHOT_TABLE {
            let [lo, hi] = row.fov_deg;
            if lo <= fov && fov <= hi {
                return row.category;
            }
        }
    }

    if let Some(focal) = effective_focal {
        for row in &SHOT_TABLE {
            let [lo, hi] = row.focal_length_mm;
            if lo <= focal && focal <= hi {
                return row.category;
            }
        }
    }

    distance_threshold_shot(inputs.distance_m)
}

/// Framing tier: projected subject size as a percentage of sensor height.
fn framing_shot(
    object_scale_m: f64,
    distance_m: f64,
    focal_mm: f64,
    sensor_height_mm: f64,
) -> Option<ShotCategory> {
    let percent = optics::framing_percent(object_scale_m, distance_m, focal_mm, sensor_height_mm)?;

    for band in &FRAMING_TABLE {
        let in_band = band.min_percent <= percent && percent < band.max_percent;
        let open_top = band.max_percent >= 1000.0 && percent >= band.min_percent;
        if in_band || open_top {
            return Some(band.category);
        }
    }

    if percent >= 100.0 {
        Some(ShotCategory::ExtremeCloseUp)
    } else if percent < 0.1 {
        Some(ShotCategory::ExtremeWideShot)
    } else {
        None
    }
}

/// Last-resort classification from distance alone.
fn distance_threshold_shot(distance_m: f64) -> ShotCategory {
    if distance_m < EXTREME_CLOSE_UP_MAX_M {
        ShotCategory::ExtremeCloseUp
    } else if distance_m < CLOSE_UP_MAX_M {
        ShotCategory::CloseUp
    } else if distance_m < MEDIUM_SHOT_MAX_M {
        ShotCategory::MediumShot
    } else if distance_m < FULL_SHOT_MAX_M {
        ShotCategory::FullShot
    } else if distance_m < WIDE_SHOT_MAX_M {
        ShotCategory::WideShot
    } else {
        ShotCategory::ExtremeWideShot
    }
}
