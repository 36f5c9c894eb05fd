//! Geometry between the camera position and its look-at target.
//!
//! All angles are in degrees. Sign conventions: positive pitch means the
//! camera sits above the target looking down ("tilt down" in prompt text);
//! positive yaw means the camera sits to the right of the target's forward
//! axis.

use glam::DVec3;

/// Below this horizontal distance the camera is treated as directly
/// above/below the target and `atan2` is bypassed.
const DEGENERACY_EPS: f64 = 0.001;

/// Derived view angles for one pose.
///
/// Roll is always 0: a position/target pair carries no bank information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    /// Vertical tilt angle in degrees.
    pub pitch_deg: f64,
    /// Horizontal pan angle in degrees, relative to the target's forward axis.
    pub yaw_deg: f64,
    /// Bank angle in degrees; always 0 in this model.
    pub roll_deg: f64,
}

impl ViewAngles {
    /// The zero angles used when no pose geometry is available.
    pub const ZERO: Self = Self {
        pitch_deg: 0.0,
        yaw_deg: 0.0,
        roll_deg: 0.0,
    };
}

/// Straight-line distance from `position` to `target`, in grid units.
#[must_use]
pub fn distance(position: DVec3, target: DVec3) -> f64 {
    position.distance(target)
}

/// Distance between `position` and `target` projected onto the ground plane.
#[must_use]
pub fn horizontal_distance(position: DVec3, target: DVec3) -> f64 {
    let d = position - target;
    d.x.hypot(d.z)
}

/// Computes pitch and yaw for a camera at `position` looking at `target`.
///
/// With the camera (nearly) directly above or below the target the
/// horizontal distance vanishes and pitch snaps to exactly +90 or -90 by the
/// sign of the vertical offset. Yaw falls back to 0 when the depth offset is
/// below the same threshold.
#[must_use]
pub fn view_angles(position: DVec3, target: DVec3) -> ViewAngles {
    let d = position - target;
    let horizontal = d.x.hypot(d.z);

    let pitch_deg = if horizontal > DEGENERACY_EPS {
        d.y.atan2(horizontal).to_degrees()
    } else if d.y > 0.0 {
        90.0
    } else {
        -90.0
    };

    let yaw_deg = if d.z.abs() > DEGENERACY_EPS {
        d.x.atan2(-d.z).to_degrees()
    } else {
        0.0
    };

    ViewAngles {
        pitch_deg,
        yaw_deg,
        roll_deg: 0.0,
    }
}

/// Horizontal bearing of the camera around the target, in `[0, 360)` degrees.
///
/// Measured as `atan2(dx, dz)` so a camera directly in front of the target
/// (positive z offset) is at bearing 0. Note the axis convention differs from
/// [`view_angles`] yaw on purpose: the bearing drives the pan wording, which
/// counts clockwise from "in front".
#[must_use]
pub fn bearing_deg(position: DVec3, target: DVec3) -> f64 {
    let d = position - target;
    let mut bearing = d.x.atan2(d.z).to_degrees();
    if bearing < 0.0 {
        bearing += 360.0;
    }
    bearing
}
