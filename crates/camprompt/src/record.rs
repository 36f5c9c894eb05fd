//! The machine-readable camera record.

use camprompt_classify::ShotCategory;
use camprompt_core::{CameraConfig, Result, ViewAngles};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Structured description of one camera pose.
///
/// Field declaration order is the serialized key order. Serialized under a
/// top-level `camera` key with 4-space indentation; the indentation is a
/// readability choice, not a wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct CameraRecord {
    /// Truncated focal length, or null when no lens information was given.
    pub focal_length_mm: Option<i64>,
    /// Horizontal sensor dimension in millimeters.
    pub sensor_width_mm: i64,
    /// Vertical sensor dimension in millimeters.
    pub sensor_height_mm: i64,
    /// Camera-to-target distance in meters, 1 decimal.
    pub distance_m: f64,
    /// Signed tilt description, e.g. `tilt down 32.6`.
    pub tilt_deg: String,
    /// Signed pan description, e.g. `pan to left 45.0`.
    pub pan_deg: String,
    /// Bank angle in degrees, 1 decimal (always 0 in this model).
    pub roll_deg: f64,
    /// Shot category slug, or null when unclassifiable.
    pub shot_type: Option<&'static str>,
}

#[derive(Serialize)]
struct CameraDocument<'a> {
    camera: &'a CameraRecord,
}

impl CameraRecord {
    /// Builds the record from the pipeline's derived values.
    #[must_use]
    pub fn new(
        angles: &ViewAngles,
        distance_m: f64,
        focal_length_mm: Option<f64>,
        shot: Option<ShotCategory>,
        cfg: &CameraConfig,
    ) -> Self {
        Self {
            focal_length_mm: focal_length_mm.map(|f| f as i64),
            sensor_width_mm: cfg.sensor_width_mm as i64,
            sensor_height_mm: cfg.sensor_height_mm as i64,
            distance_m: round1(distance_m),
            tilt_deg: signed_axis("tilt down", "tilt up", "tilt", angles.pitch_deg),
            pan_deg: signed_axis("pan to right", "pan to left", "pan", angles.yaw_deg),
            roll_deg: round1(angles.roll_deg),
            shot_type: shot.map(ShotCategory::slug),
        }
    }

    /// Serializes the record under a `camera` key with 4-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        CameraDocument { camera: self }.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// "{positive} {m}" / "{negative} {m}" by sign, or "{zero} 0" at exactly zero.
fn signed_axis(positive: &str, negative: &str, zero: &str, value_deg: f64) -> String {
    if value_deg > 0.0 {
        format!("{positive} {:.1}", value_deg.abs())
    } else if value_deg < 0.0 {
        format!("{negative} {:.1}", value_deg.abs())
    } else {
        format!("{zero} 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles(pitch: f64, yaw: f64) -> ViewAngles {
        ViewAngles {
            pitch_deg: pitch,
            yaw_deg: yaw,
            roll_deg: 0.0,
        }
    }

    fn record(pitch: f64, yaw: f64) -> CameraRecord {
        CameraRecord::new(
            &angles(pitch, yaw),
            2.0,
            Some(50.0),
            Some(ShotCategory::MediumShot),
            &CameraConfig::default(),
        )
    }

    #[test]
    fn test_signed_descriptions() {
        let r = record(32.56, -45.0);
        assert_eq!(r.tilt_deg, "tilt down 32.6");
        assert_eq!(r.pan_deg, "pan to left 45.0");

        let r = record(-90.0, 180.0);
        assert_eq!(r.tilt_deg, "tilt up 90.0");
        assert_eq!(r.pan_deg, "pan to right 180.0");

        let r = record(0.0, 0.0);
        assert_eq!(r.tilt_deg, "tilt 0");
        assert_eq!(r.pan_deg, "pan 0");
    }

    #[test]
    fn test_json_shape() {
        let json = record(10.0, 0.0).to_json().unwrap();

        // Four-space indentation under a top-level camera key.
        assert!(json.starts_with("{\n    \"camera\": {\n        \"focal_length_mm\": 50,"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let camera = &value["camera"];
        assert_eq!(camera["sensor_width_mm"], 36);
        assert_eq!(camera["sensor_height_mm"], 24);
        assert_eq!(camera["distance_m"], 2.0);
        assert_eq!(camera["roll_deg"], 0.0);
        assert_eq!(camera["shot_type"], "medium_shot");
    }

    #[test]
    fn test_declared_key_order_is_preserved() {
        let json = record(10.0, 0.0).to_json().unwrap();
        let keys = [
            "focal_length_mm",
            "sensor_width_mm",
            "sensor_height_mm",
            "distance_m",
            "tilt_deg",
            "pan_deg",
            "roll_deg",
            "shot_type",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_absent_lens_and_shot_serialize_as_null() {
        let r = CameraRecord::new(
            &angles(0.0, 0.0),
            0.0,
            None,
            None,
            &CameraConfig::default(),
        );
        let json = r.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["camera"]["focal_length_mm"].is_null());
        assert!(value["camera"]["shot_type"].is_null());
    }
}
