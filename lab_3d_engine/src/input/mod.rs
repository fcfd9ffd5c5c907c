//! Input module
//!
//! Maps keyboard events to camera motion and model spawning.

mod key_bindings;
mod input_controller;

pub use key_bindings::{Action, KeyBindings};
pub use input_controller::{InputController, InputResponse, KeyPhase};
