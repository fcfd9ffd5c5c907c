/// Spawn throttling against a monotonic clock.
///
/// Callers pass `Instant`s in, so the gate is deterministic under test.

use std::time::{Duration, Instant};

/// Accepts a spawn request only if `cooldown` has elapsed since the last
/// accepted one. The first request is always accepted.
#[derive(Debug, Clone)]
pub struct SpawnCooldown {
    cooldown: Duration,
    last_spawn: Option<Instant>,
}

impl SpawnCooldown {
    pub fn new(cooldown: Duration) -> Self {
        Self { cooldown, last_spawn: None }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Consume the gate if it is open at `now`.
    ///
    /// Returns `true` when the request is accepted.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.last_spawn = Some(now);
        true
    }

    /// Whether a request at `now` would be accepted
    pub fn is_ready(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Time left before the gate reopens (zero when open)
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_spawn {
            Some(last) => self.cooldown.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Forget the last accepted spawn
    pub fn reset(&mut self) {
        self.last_spawn = None;
    }
}

#[cfg(test)]
#[path = "spawn_cooldown_tests.rs"]
mod tests;
