/// InputController - applies bound key actions to a `Scene`.
///
/// The controller holds no per-run state of its own: camera and spawn
/// throttling live in the scene it is handed on each event.

use std::time::Instant;
use bitflags::bitflags;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use crate::config::LabConfig;
use crate::scene::Scene;
use super::key_bindings::{Action, KeyBindings};

/// Key event phase. `Press` and `Repeat` act, `Release` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Press,
    Repeat,
    Release,
}

impl KeyPhase {
    pub fn from_winit(state: ElementState, repeat: bool) -> Self {
        match (state, repeat) {
            (ElementState::Released, _) => KeyPhase::Release,
            (ElementState::Pressed, false) => KeyPhase::Press,
            (ElementState::Pressed, true) => KeyPhase::Repeat,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, KeyPhase::Release)
    }
}

bitflags! {
    /// What a handled key event changed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputResponse: u32 {
        const NONE = 0;
        const CAMERA_MOVED = 1 << 0;
        const CAMERA_ROTATED = 1 << 1;
        const MODEL_SPAWNED = 1 << 2;
        /// A spawn was requested but the cooldown had not elapsed
        const SPAWN_THROTTLED = 1 << 3;
    }
}

impl InputResponse {
    /// Whether the view matrix needs recomputing
    pub fn camera_changed(&self) -> bool {
        self.intersects(Self::CAMERA_MOVED | Self::CAMERA_ROTATED)
    }
}

/// Keyboard to scene mapping.
///
/// Each movement event moves the camera by one unit of its speed constant;
/// each rotation event turns it by `rotation_step` degrees before the
/// camera's sensitivity is applied.
#[derive(Debug, Clone)]
pub struct InputController {
    bindings: KeyBindings,
    rotation_step: f32,
}

impl InputController {
    pub fn new(bindings: KeyBindings, rotation_step: f32) -> Self {
        Self { bindings, rotation_step }
    }

    /// Default bindings with the configured rotation step
    pub fn from_config(config: &LabConfig) -> Self {
        Self::new(KeyBindings::default(), config.rotation_step)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    pub fn set_rotation_step(&mut self, rotation_step: f32) {
        self.rotation_step = rotation_step;
    }

    /// Apply the action bound to `key`, if any.
    ///
    /// `now` is only consulted for spawn requests.
    pub fn handle_key(
        &self,
        scene: &mut Scene,
        key: KeyCode,
        phase: KeyPhase,
        now: Instant,
    ) -> InputResponse {
        if !phase.is_active() {
            return InputResponse::NONE;
        }
        let Some(action) = self.bindings.action(key) else {
            return InputResponse::NONE;
        };
        self.apply(scene, action, now)
    }

    /// Apply a winit keyboard event. Unidentified physical keys are ignored.
    pub fn handle_event(&self, scene: &mut Scene, event: &KeyEvent, now: Instant) -> InputResponse {
        let PhysicalKey::Code(key) = event.physical_key else {
            return InputResponse::NONE;
        };
        self.handle_key(scene, key, KeyPhase::from_winit(event.state, event.repeat), now)
    }

    fn apply(&self, scene: &mut Scene, action: Action, now: Instant) -> InputResponse {
        let step = self.rotation_step;
        let camera = scene.camera_mut();

        match action {
            Action::MoveForward => camera.move_forward(1.0),
            Action::MoveBackward => camera.move_forward(-1.0),
            Action::MoveRight => camera.move_right(1.0),
            Action::MoveLeft => camera.move_right(-1.0),
            Action::MoveUp => camera.move_up(1.0),
            Action::MoveDown => camera.move_up(-1.0),
            Action::YawRight => {
                camera.rotate(step, 0.0);
                return InputResponse::CAMERA_ROTATED;
            }
            Action::YawLeft => {
                camera.rotate(-step, 0.0);
                return InputResponse::CAMERA_ROTATED;
            }
            Action::PitchUp => {
                camera.rotate(0.0, step);
                return InputResponse::CAMERA_ROTATED;
            }
            Action::PitchDown => {
                camera.rotate(0.0, -step);
                return InputResponse::CAMERA_ROTATED;
            }
            Action::SpawnModel => {
                return match scene.spawn_model(now) {
                    Some(_) => InputResponse::MODEL_SPAWNED,
                    None => InputResponse::SPAWN_THROTTLED,
                };
            }
        }
        InputResponse::CAMERA_MOVED
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(KeyBindings::default(), 10.0)
    }
}

#[cfg(test)]
#[path = "input_controller_tests.rs"]
mod tests;
