//! Core abstractions for camprompt.
//!
//! This crate provides the fundamental types used throughout camprompt:
//! - [`CameraPose`] and [`LensParams`] input values
//! - Geometry helpers deriving distance and view angles from a pose
//! - Pinhole-optics helpers (FOV, focal length, framing percentage)
//! - [`CameraConfig`] for the sensor/scene constants shared by every stage

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod optics;
pub mod pose;

pub use config::CameraConfig;
pub use error::{CamPromptError, Result};
pub use geometry::ViewAngles;
pub use pose::{CameraPose, LensParams, Point3, EYE_LEVEL_HEIGHT};

// Re-export the glam vector type used by the geometry API
pub use glam::DVec3;
