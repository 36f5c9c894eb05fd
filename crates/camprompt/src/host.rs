//! Lenient parsing of the host's `camera_info` record.
//!
//! The host contract is loose: keys may be missing, coordinates may arrive
//! as strings, and an empty record is a valid "no camera" signal. Everything
//! here degrades to defaults instead of erroring.

use camprompt_core::Point3;
use serde_json::Value;

/// The host's camera record after lenient parsing.
///
/// `position`/`target` are `None` when the key is missing, not an object, or
/// an empty object; the pipeline then skips pose geometry entirely.
#[derive(Debug, Clone)]
pub(crate) struct HostCameraInfo {
    pub position: Option<Point3>,
    pub target: Option<Point3>,
    pub zoom: f64,
}

/// Parses a `camera_info` value; `None` means "no camera supplied".
pub(crate) fn parse_camera_info(value: &Value) -> Option<HostCameraInfo> {
    let map = value.as_object()?;
    if map.is_empty() {
        return None;
    }
    Some(HostCameraInfo {
        position: map.get("position").and_then(parse_point),
        target: map.get("target").and_then(parse_point),
        zoom: map.get("zoom").and_then(coerce_f64).unwrap_or(1.0),
    })
}

fn parse_point(value: &Value) -> Option<Point3> {
    let map = value.as_object()?;
    if map.is_empty() {
        return None;
    }
    let component = |key: &str| map.get(key).and_then(coerce_f64).unwrap_or(0.0);
    Some(Point3::new(component("x"), component("y"), component("z")))
}

/// Best-effort numeric coercion: numbers pass through, numeric strings parse,
/// booleans count as 0/1, everything else is unusable.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_and_non_object_inputs() {
        assert!(parse_camera_info(&Value::Null).is_none());
        assert!(parse_camera_info(&json!({})).is_none());
        assert!(parse_camera_info(&json!("camera")).is_none());
    }

    #[test]
    fn test_missing_parts_are_none() {
        let info = parse_camera_info(&json!({"zoom": 2})).unwrap();
        assert!(info.position.is_none());
        assert!(info.target.is_none());
        assert_eq!(info.zoom, 2.0);

        // An empty position object counts as absent.
        let info = parse_camera_info(&json!({"position": {}})).unwrap();
        assert!(info.position.is_none());
    }

    #[test]
    fn test_coercion() {
        let info = parse_camera_info(&json!({
            "position": {"x": "1.5", "y": 2, "z": true},
            "target": {"x": [], "y": " -3 "},
        }))
        .unwrap();
        assert_eq!(info.position.unwrap(), Point3::new(1.5, 2.0, 1.0));
        // Unusable values and missing keys both default to 0.
        assert_eq!(info.target.unwrap(), Point3::new(0.0, -3.0, 0.0));
        assert_eq!(info.zoom, 1.0);
    }
}
