//! camprompt: turns a 3D camera pose into generation-ready camera text.
//!
//! Given a camera position, a look-at target, and optional lens parameters,
//! camprompt produces a natural-language camera-direction phrase and a
//! structured JSON camera record for conditioning image/video generation
//! models.
//!
//! # Quick Start
//!
//! ```
//! use camprompt::{describe_pose, CameraConfig, CameraPose, LensParams, Point3};
//!
//! let pose = CameraPose::new(
//!     Point3::new(0.0, 5.0, 0.0),
//!     Point3::new(0.0, 0.0, 0.0),
//! );
//! let out = describe_pose(&pose, &LensParams::default(), &CameraConfig::default())?;
//!
//! assert!(out.prompt.starts_with("above object"));
//! assert!(out.camera_json.contains("\"camera\""));
//! # Ok::<(), camprompt::CamPromptError>(())
//! ```
//!
//! # Pipeline
//!
//! One straight-line, stateless transform per call:
//!
//! 1. **Geometry** - distance and pitch/yaw from the two pose points.
//! 2. **Classification** - shot framing and camera angle against static
//!    taxonomies ([`camprompt_classify`]).
//! 3. **Composition** - pan/tilt clauses, angle and shot names, and the
//!    numeric readout assembled into one sentence.
//! 4. **Record** - the same derived values serialized as a JSON document.
//!
//! Hosts with loosely-typed camera records should use
//! [`describe_camera_info`], which tolerates missing keys and coerces
//! string-typed numbers instead of erroring.

// Degree values are truncated to integers for prompt text on purpose
#![allow(clippy::cast_possible_truncation)]

mod compose;
mod host;
mod record;

use camprompt_core::{geometry, optics};
use serde_json::Value;

pub use camprompt_classify::{
    classify_angle, classify_shot, AngleCategory, ShotCategory, ShotInputs, ANGLE_TABLE,
    FRAMING_TABLE, SHOT_TABLE,
};
pub use camprompt_core::{
    CamPromptError, CameraConfig, CameraPose, DVec3, LensParams, Point3, Result, ViewAngles,
    EYE_LEVEL_HEIGHT,
};
pub use compose::CameraReadout;
pub use record::CameraRecord;

/// The two outputs of one description call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraPrompt {
    /// Natural-language camera-direction phrase; empty when no camera was
    /// supplied.
    pub prompt: String,
    /// JSON document under a top-level `camera` key, or `{}` when no camera
    /// was supplied.
    pub camera_json: String,
}

impl CameraPrompt {
    /// The output for an absent or empty camera record.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prompt: String::new(),
            camera_json: "{}".to_string(),
        }
    }
}

/// Pose-derived values feeding the shared pipeline tail.
struct PoseGeometry {
    grid_distance: f64,
    angles: ViewAngles,
    /// Camera/target points when a full pose was available; `None` skips the
    /// pan clause.
    endpoints: Option<(DVec3, DVec3)>,
}

impl PoseGeometry {
    /// Geometry for a record with no usable position/target.
    fn degenerate() -> Self {
        Self {
            grid_distance: 0.0,
            angles: ViewAngles::ZERO,
            endpoints: None,
        }
    }
}

/// Describes a fully-specified camera pose.
pub fn describe_pose(
    pose: &CameraPose,
    lens: &LensParams,
    cfg: &CameraConfig,
) -> Result<CameraPrompt> {
    let position = pose.position.as_dvec3();
    let target = pose.target.as_dvec3();
    let geo = PoseGeometry {
        grid_distance: geometry::distance(position, target),
        angles: geometry::view_angles(position, target),
        endpoints: Some((position, target)),
    };
    run_pipeline(&geo, lens, cfg)
}

/// Describes a loosely-typed host `camera_info` record.
///
/// An absent or empty record yields [`CameraPrompt::empty`]. A record with a
/// missing position or target still produces a description, computed from
/// zeroed geometry, so a degraded upstream never aborts the pipeline.
pub fn describe_camera_info(
    camera_info: &Value,
    lens: &LensParams,
    cfg: &CameraConfig,
) -> Result<CameraPrompt> {
    let Some(info) = host::parse_camera_info(camera_info) else {
        return Ok(CameraPrompt::empty());
    };

    match (info.position, info.target) {
        (Some(position), Some(target)) => {
            let pose = CameraPose {
                position,
                target,
                zoom: info.zoom,
            };
            describe_pose(&pose, lens, cfg)
        }
        _ => run_pipeline(&PoseGeometry::degenerate(), lens, cfg),
    }
}

fn run_pipeline(geo: &PoseGeometry, lens: &LensParams, cfg: &CameraConfig) -> Result<CameraPrompt> {
    let distance_m = geo.grid_distance * cfg.grid_to_meters;
    let focal = lens.explicit_focal_mm();
    let fov = focal.and_then(|f| optics::fov_from_focal_length(f, cfg.sensor_width_mm));

    let angle = (geo.angles.pitch_deg.abs() > cfg.eye_level_tolerance_deg)
        .then(|| classify_angle(geo.angles.pitch_deg, geo.angles.roll_deg, cfg));

    let shot = classify_shot(
        &ShotInputs {
            distance_m,
            fov_deg: fov,
            focal_length_mm: focal,
            object_scale_m: lens.object_scale_m,
        },
        cfg,
    );

    let pan = geo
        .endpoints
        .and_then(|(position, target)| compose::pan_clause(position, target));
    let tilt = compose::tilt_clause(geo.angles.pitch_deg, cfg);

    let displayed_focal = focal.or_else(|| fov.and_then(optics::estimate_focal_from_fov));
    let readout = CameraReadout {
        distance_m,
        focal_length_mm: displayed_focal,
        fov_deg: fov,
    };
    let readout_clause = readout.clause();

    let prompt = compose::assemble(
        pan.as_deref(),
        tilt.as_deref(),
        angle.map(AngleCategory::label),
        Some(shot.label()),
        Some(readout_clause.as_str()),
        &lens.custom_description,
    );

    log::debug!(
        "described pose: shot={:?} angle={:?} distance_m={:.2}",
        shot,
        angle,
        distance_m
    );

    let record = CameraRecord::new(&geo.angles, distance_m, focal, Some(shot), cfg);
    let camera_json = record.to_json()?;

    Ok(CameraPrompt {
        prompt,
        camera_json,
    })
}
