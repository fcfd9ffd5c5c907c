//! Scene module
//!
//! Provides model instances, the scene state and animation strategies.

mod transformable;
mod spawn_cooldown;
mod animator;
mod scene;

pub use transformable::Transformable;
pub use spawn_cooldown::SpawnCooldown;
pub use animator::{Animator, OrbitAnimator};
pub use scene::{Scene, ModelKey};
