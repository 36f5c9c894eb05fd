//! Shot-framing and camera-angle classification for camprompt.
//!
//! Both passes are prioritized fallback chains over static reference tables:
//! rules are consulted top to bottom and the first match wins. The tables are
//! reference data, never modified at runtime.

pub mod angle;
pub mod shot;
pub mod tables;

pub use angle::classify_angle;
pub use shot::{classify_shot, ShotInputs};
pub use tables::{AngleCategory, AngleRange, FramingBand, ShotCategory, ShotRange};
pub use tables::{ANGLE_TABLE, FRAMING_TABLE, SHOT_TABLE};
