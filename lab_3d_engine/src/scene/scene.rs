/// Scene - the camera, the spawned models and the animated instances.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// All mutable per-run state lives here and is passed to the input
/// controller and the frame loop explicitly.

use std::time::{Duration, Instant};
use slotmap::{new_key_type, SlotMap};
use glam::Vec3;
use crate::camera::Camera;
use crate::config::{LabConfig, SpawnConfig};
use crate::error::Result;
use crate::rasterizer::{Rasterizer, UniformSlot};
use crate::resource::MeshRegistry;
use crate::{engine_debug, engine_info, engine_trace};
use super::animator::{Animator, OrbitAnimator};
use super::spawn_cooldown::SpawnCooldown;
use super::transformable::Transformable;

new_key_type! {
    /// Stable key to a model in the scene
    pub struct ModelKey;
}

/// Per-run scene state.
///
/// Model draw order follows slot order, not insertion order.
pub struct Scene {
    camera: Camera,
    /// Models placed by the user or by `insert_model`
    models: SlotMap<ModelKey, Transformable>,
    /// Throttle for `spawn_model`
    spawn_cooldown: SpawnCooldown,
    /// Distance along the camera front where spawned models appear
    spawn_distance: f32,
    /// Scale of spawned models
    spawn_scale: Vec3,
    /// Optional time-driven instances
    animator: Option<Box<dyn Animator>>,
    /// Output of the animator for the last `update`
    animated: Vec<Transformable>,
}

impl Scene {
    /// Create an empty scene around `camera`
    pub fn new(camera: Camera, spawn: &SpawnConfig) -> Self {
        Self {
            camera,
            models: SlotMap::with_key(),
            spawn_cooldown: SpawnCooldown::new(spawn.cooldown),
            spawn_distance: spawn.distance,
            spawn_scale: spawn.scale,
            animator: None,
            animated: Vec::new(),
        }
    }

    /// Build the camera, spawn settings and optional orbit animation from `config`
    pub fn from_config(config: &LabConfig) -> Self {
        let camera = Camera::from_config(&config.camera, config.aspect_ratio());
        let mut scene = Self::new(camera, &config.spawn);
        if let Some(orbit) = &config.orbit {
            scene.set_animator(Box::new(OrbitAnimator::new(orbit.clone())));
        }
        scene
    }

    // ===== CAMERA =====

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    // ===== MODELS =====

    /// Place a new model in front of the camera, subject to the spawn cooldown.
    ///
    /// Returns `None` when the request is throttled.
    pub fn spawn_model(&mut self, now: Instant) -> Option<ModelKey> {
        if !self.spawn_cooldown.try_acquire(now) {
            engine_trace!("lab3d::Scene", "Spawn throttled ({:?} remaining)",
                self.spawn_cooldown.remaining(now));
            return None;
        }

        let position = self.camera.position() + self.camera.front() * self.spawn_distance;
        let key = self.models.insert(
            Transformable::new()
                .with_position(position)
                .with_scale(self.spawn_scale),
        );

        engine_debug!("lab3d::Scene", "Spawned model at ({:.2}, {:.2}, {:.2}), {} total",
            position.x, position.y, position.z, self.models.len());
        Some(key)
    }

    /// Add a model without going through the cooldown
    pub fn insert_model(&mut self, model: Transformable) -> ModelKey {
        self.models.insert(model)
    }

    /// Remove a model. Returns it if the key was valid.
    pub fn remove_model(&mut self, key: ModelKey) -> Option<Transformable> {
        self.models.remove(key)
    }

    pub fn model(&self, key: ModelKey) -> Option<&Transformable> {
        self.models.get(key)
    }

    pub fn model_mut(&mut self, key: ModelKey) -> Option<&mut Transformable> {
        self.models.get_mut(key)
    }

    /// Iterate over all models with their keys
    pub fn models(&self) -> impl Iterator<Item = (ModelKey, &Transformable)> {
        self.models.iter()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Remove all models and reopen the spawn gate
    pub fn clear_models(&mut self) {
        self.models.clear();
        self.spawn_cooldown.reset();
    }

    pub fn spawn_cooldown(&self) -> &SpawnCooldown {
        &self.spawn_cooldown
    }

    // ===== ANIMATION =====

    /// Install an animator. Its instances appear after the next `update`.
    pub fn set_animator(&mut self, animator: Box<dyn Animator>) {
        engine_info!("lab3d::Scene", "Animator installed");
        self.animator = Some(animator);
        self.animated.clear();
    }

    /// Remove the animator and its instances
    pub fn clear_animator(&mut self) {
        self.animator = None;
        self.animated.clear();
    }

    pub fn has_animator(&self) -> bool {
        self.animator.is_some()
    }

    /// Instances produced by the last `update`
    pub fn animated_instances(&self) -> &[Transformable] {
        &self.animated
    }

    /// Advance the animation to `elapsed` since the start of the run
    pub fn update(&mut self, elapsed: Duration) {
        if let Some(animator) = &self.animator {
            animator.animate(elapsed, &mut self.animated);
        }
    }

    // ===== RENDERING =====

    /// Record one frame.
    ///
    /// Writes the view and projection uniforms once, then draws every model
    /// followed by every animated instance with the shared mesh.
    pub fn render(&self, registry: &MeshRegistry, rasterizer: &mut dyn Rasterizer) -> Result<()> {
        rasterizer.write_matrix(UniformSlot::View, &self.camera.view_matrix())?;
        rasterizer.write_matrix(UniformSlot::Projection, &self.camera.projection_matrix())?;

        for model in self.models.values() {
            model.draw(registry, rasterizer)?;
        }
        for instance in &self.animated {
            instance.draw(registry, rasterizer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
