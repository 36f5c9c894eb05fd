//! Configuration constants shared by every pipeline stage.

use serde::{Deserialize, Serialize};

/// Sensor and scene constants used by classification and composition.
///
/// These are reference values, not tunables discovered at runtime; the
/// defaults model a full-frame 36x24 mm sensor and the viewport's fixed
/// grid-to-meters scene scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Horizontal sensor dimension in millimeters (drives the prompt-facing FOV).
    pub sensor_width_mm: f64,
    /// Vertical sensor dimension in millimeters (drives framing percentage).
    pub sensor_height_mm: f64,
    /// Meters per grid unit of the upstream viewport.
    pub grid_to_meters: f64,
    /// Pitch magnitude below which the view counts as eye level (degrees).
    pub eye_level_tolerance_deg: f64,
    /// Roll magnitude at which a view counts as a dutch angle (degrees).
    pub dutch_roll_min_deg: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensor_width_mm: 36.0,
            sensor_height_mm: 24.0,
            grid_to_meters: 4.0,
            eye_level_tolerance_deg: 5.0,
            dutch_roll_min_deg: 5.0,
        }
    }
}

impl CameraConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sensor dimensions in millimeters.
    pub fn with_sensor_mm(mut self, width: f64, height: f64) -> Self {
        self.sensor_width_mm = width;
        self.sensor_height_mm = height;
        self
    }

    /// Sets the scene scale in meters per grid unit.
    pub fn with_grid_to_meters(mut self, grid_to_meters: f64) -> Self {
        self.grid_to_meters = grid_to_meters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CameraConfig::default();
        assert_eq!(cfg.sensor_width_mm, 36.0);
        assert_eq!(cfg.sensor_height_mm, 24.0);
        assert_eq!(cfg.grid_to_meters, 4.0);
        assert_eq!(cfg.eye_level_tolerance_deg, 5.0);
        assert_eq!(cfg.dutch_roll_min_deg, 5.0);
    }

    #[test]
    fn test_builder() {
        let cfg = CameraConfig::new().with_sensor_mm(23.5, 15.6);
        assert_eq!(cfg.sensor_width_mm, 23.5);
        assert_eq!(cfg.sensor_height_mm, 15.6);
    }
}
