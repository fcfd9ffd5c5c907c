//! Camera module - first-person yaw/pitch camera.
//!
//! The camera is a tool provided by the engine, owned and driven by the
//! caller. It only derives matrices; it never touches the rasterizer.

mod camera;

pub use camera::{Camera, PITCH_LIMIT};
