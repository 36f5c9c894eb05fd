//! Tests for the lenient host-record entry point.

use camprompt::{describe_camera_info, CameraConfig, CameraPrompt, LensParams};
use serde_json::json;

fn describe(camera_info: &serde_json::Value) -> CameraPrompt {
    describe_camera_info(camera_info, &LensParams::default(), &CameraConfig::default())
        .expect("describe failed")
}

#[test]
fn test_absent_camera_yields_empty_output() {
    assert_eq!(describe(&serde_json::Value::Null), CameraPrompt::empty());
    assert_eq!(describe(&json!({})), CameraPrompt::empty());

    let empty = CameraPrompt::empty();
    assert_eq!(empty.prompt, "");
    assert_eq!(empty.camera_json, "{}");
}

#[test]
fn test_missing_position_degrades_to_zero_geometry() {
    // A record with no usable position still produces a description:
    // distance 0, no pan/tilt wording, shot resolved through the FOV tier.
    let out = describe(&json!({"target": {"x": 1.0}, "zoom": 1}));

    assert_eq!(
        out.prompt,
        "medium close-up. (camera distance 0.0 m 50mm FOV 39°)"
    );

    let value: serde_json::Value = serde_json::from_str(&out.camera_json).unwrap();
    assert_eq!(value["camera"]["distance_m"], 0.0);
    assert_eq!(value["camera"]["tilt_deg"], "tilt 0");
    assert_eq!(value["camera"]["pan_deg"], "pan 0");
    assert_eq!(value["camera"]["shot_type"], "medium_close_up");
}

#[test]
fn test_string_coordinates_are_coerced() {
    let out = describe(&json!({
        "position": {"x": "1.0", "y": 0, "z": "0.5"},
        "target": {"x": 0},
    }));

    assert!(out.prompt.starts_with("Pan the camera 63 degrees to the right"));
    let value: serde_json::Value = serde_json::from_str(&out.camera_json).unwrap();
    assert_eq!(value["camera"]["shot_type"], "full_shot");
}

#[test]
fn test_unusable_coordinates_default_to_zero() {
    // Junk components fall back to 0 rather than erroring; position and
    // target then coincide and the degenerate-pose wording applies.
    let out = describe(&json!({
        "position": {"x": [], "y": {"nested": true}},
        "target": {"x": 0},
    }));

    assert!(out.prompt.starts_with("below object"));
}

#[test]
fn test_zoom_is_accepted_but_ignored() {
    let base = describe(&json!({
        "position": {"z": 0.5, "y": 0.425},
        "target": {"y": 0.425},
    }));
    let zoomed = describe(&json!({
        "position": {"z": 0.5, "y": 0.425},
        "target": {"y": 0.425},
        "zoom": 7.5,
    }));

    assert_eq!(base, zoomed);
}
