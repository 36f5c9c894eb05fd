//! Camera pose and lens input values.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Height of the default eye-level pose above the ground plane, in grid units.
pub const EYE_LEVEL_HEIGHT: f64 = 0.425;

/// A point in the viewport's grid-unit space.
///
/// Serialized as a `{x, y, z}` map; missing components default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate (grid units).
    #[serde(default)]
    pub x: f64,
    /// Y coordinate (grid units, up).
    #[serde(default)]
    pub y: f64,
    /// Z coordinate (grid units, toward the viewer).
    #[serde(default)]
    pub z: f64,
}

impl Point3 {
    /// Creates a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns this point as a glam vector.
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for DVec3 {
    fn from(p: Point3) -> Self {
        p.as_dvec3()
    }
}

/// A single static camera pose: where the camera is and what it looks at.
///
/// Not retained across calls; each description is computed from one pose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera position in grid units.
    #[serde(default)]
    pub position: Point3,
    /// Look-at target in grid units.
    #[serde(default)]
    pub target: Point3,
    /// Viewport zoom factor as reported by the host. Accepted for contract
    /// compatibility; not read by any computation.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_zoom() -> f64 {
    1.0
}

impl CameraPose {
    /// Creates a pose from explicit position and target.
    pub fn new(position: Point3, target: Point3) -> Self {
        Self {
            position,
            target,
            zoom: 1.0,
        }
    }

    /// The standing eye-level pose: camera half a grid unit in front of the
    /// target, both at [`EYE_LEVEL_HEIGHT`].
    pub fn eye_level() -> Self {
        Self::new(
            Point3::new(0.0, EYE_LEVEL_HEIGHT, 0.5),
            Point3::new(0.0, EYE_LEVEL_HEIGHT, 0.0),
        )
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::eye_level()
    }
}

/// Optional lens parameters supplied by the caller.
///
/// A non-positive focal length disables FOV-derived computations rather than
/// erroring; the pipeline treats it as "no lens information".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensParams {
    /// Focal length in millimeters (host domain `[1, 1000]`, default 50).
    #[serde(default = "default_focal_length")]
    pub focal_length_mm: f64,
    /// Real-world size of the framed object in meters, if known
    /// (host domain `[0.01, 100]`).
    #[serde(default)]
    pub object_scale_m: Option<f64>,
    /// Free text appended verbatim (trimmed) to the composed prompt.
    #[serde(default)]
    pub custom_description: String,
}

fn default_focal_length() -> f64 {
    50.0
}

impl Default for LensParams {
    fn default() -> Self {
        Self {
            focal_length_mm: default_focal_length(),
            object_scale_m: None,
            custom_description: String::new(),
        }
    }
}

impl LensParams {
    /// Creates lens parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the focal length in millimeters.
    pub fn with_focal_length_mm(mut self, focal_length_mm: f64) -> Self {
        self.focal_length_mm = focal_length_mm;
        self
    }

    /// Sets the framed object's real-world size in meters.
    pub fn with_object_scale_m(mut self, object_scale_m: f64) -> Self {
        self.object_scale_m = Some(object_scale_m);
        self
    }

    /// Sets the free-text description appended to the prompt.
    pub fn with_custom_description(mut self, text: impl Into<String>) -> Self {
        self.custom_description = text.into();
        self
    }

    /// The focal length as an optional value: `None` when non-positive.
    pub fn explicit_focal_mm(&self) -> Option<f64> {
        (self.focal_length_mm > 0.0).then_some(self.focal_length_mm)
    }
}
