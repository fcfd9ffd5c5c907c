/// Animation strategies.
///
/// An Animator rewrites a set of instance transforms as a pure function of
/// elapsed time. The scene calls it once per frame before rendering.

use std::time::Duration;
use glam::Vec3;
use crate::config::OrbitConfig;
use super::transformable::Transformable;

/// Strategy for time-driven instance transforms.
///
/// `&self` because the output depends only on `elapsed`: the same animator
/// gives the same frame for the same time.
pub trait Animator: Send + Sync {
    /// Overwrite `instances` with the pose at `elapsed` since start.
    fn animate(&self, elapsed: Duration, instances: &mut Vec<Transformable>);
}

/// Instances evenly spaced on a circle, orbiting about the Z axis.
///
/// Instance `i` of `n` sits at angle `360/n * i + elapsed * speed` in the XY
/// plane at the configured depth, turned about Z by the same angle so it
/// keeps facing along its path.
pub struct OrbitAnimator {
    config: OrbitConfig,
}

impl OrbitAnimator {
    pub fn new(config: OrbitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Angle of instance `index` in degrees, wrapped to [0, 360).
    pub fn angle_degrees(&self, index: u32, elapsed: Duration) -> f32 {
        let spacing = 360.0 / self.config.instance_count.max(1) as f64;
        let angle = spacing * index as f64
            + elapsed.as_secs_f64() * self.config.degrees_per_second as f64;
        angle.rem_euclid(360.0) as f32
    }

    /// Pose of instance `index` at `elapsed`
    pub fn instance(&self, index: u32, elapsed: Duration) -> Transformable {
        let angle = self.angle_degrees(index, elapsed);
        let (sin, cos) = angle.to_radians().sin_cos();

        Transformable::new()
            .with_position(Vec3::new(
                self.config.radius * cos,
                self.config.radius * sin,
                self.config.depth,
            ))
            .with_rotation(Vec3::new(0.0, 0.0, angle))
            .with_scale(Vec3::splat(self.config.scale))
    }
}

impl Animator for OrbitAnimator {
    fn animate(&self, elapsed: Duration, instances: &mut Vec<Transformable>) {
        instances.clear();
        instances.extend((0..self.config.instance_count).map(|i| self.instance(i, elapsed)));
    }
}

#[cfg(test)]
#[path = "animator_tests.rs"]
mod tests;
