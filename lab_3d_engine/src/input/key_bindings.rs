/// Key to action table.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    SpawnModel,
}

impl Action {
    /// Whether the action is throttled by the spawn cooldown
    pub fn is_spawn(&self) -> bool {
        matches!(self, Action::SpawnModel)
    }
}

/// Physical key bindings. One action per key; several keys may share an action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: FxHashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// No bindings at all
    pub fn empty() -> Self {
        Self { bindings: FxHashMap::default() }
    }

    /// Bind `key` to `action`, returning the action it replaced
    pub fn bind(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.bindings.remove(&key)
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Keys currently bound to `action`
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings.iter()
            .filter(move |&(_, &a)| a == action)
            .map(|(&key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    /// WASD moves, E/Q go up/down, arrows turn, Space spawns.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyW, Action::MoveForward);
        bindings.bind(KeyCode::KeyS, Action::MoveBackward);
        bindings.bind(KeyCode::KeyA, Action::MoveLeft);
        bindings.bind(KeyCode::KeyD, Action::MoveRight);
        bindings.bind(KeyCode::KeyE, Action::MoveUp);
        bindings.bind(KeyCode::KeyQ, Action::MoveDown);
        bindings.bind(KeyCode::ArrowLeft, Action::YawLeft);
        bindings.bind(KeyCode::ArrowRight, Action::YawRight);
        bindings.bind(KeyCode::ArrowUp, Action::PitchUp);
        bindings.bind(KeyCode::ArrowDown, Action::PitchDown);
        bindings.bind(KeyCode::Space, Action::SpawnModel);
        bindings
    }
}

#[cfg(test)]
#[path = "key_bindings_tests.rs"]
mod tests;
