//! Demo: describe a camera pose as generation-ready camera text.
//!
//! Pass a path to a `camera_info` JSON file, or run without arguments for a
//! built-in three-quarter view of a human-scale subject.

use camprompt::{describe_camera_info, CameraConfig, LensParams};
use serde_json::json;

fn main() -> camprompt::Result<()> {
    env_logger::init();

    let camera_info = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => json!({
            "position": {"x": 2.0, "y": 3.0, "z": 4.0},
            "target": {"x": 0.0, "y": 0.425, "z": 0.0},
            "zoom": 1.0,
        }),
    };

    let lens = LensParams::default().with_object_scale_m(1.8);
    let out = describe_camera_info(&camera_info, &lens, &CameraConfig::default())?;

    println!("prompt: {}", out.prompt);
    println!("{}", out.camera_json);
    Ok(())
}
