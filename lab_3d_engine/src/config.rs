/// Lab configuration - plain structs with defaults

use std::time::Duration;
use glam::Vec3;
use crate::log::{DefaultLogger, LogSeverity};

/// Camera tuning
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Initial position in world space
    pub position: Vec3,
    /// World up vector (normalized by the camera)
    pub world_up: Vec3,
    /// Initial yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Initial pitch in degrees
    pub pitch: f32,
    /// Multiplier applied to rotation deltas
    pub sensitivity: f32,
    /// Multiplier applied to movement amounts
    pub speed: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane distance
    pub near_plane: f32,
    /// Far clip plane distance
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            sensitivity: 0.1,
            speed: 0.05,
            fov_degrees: 60.0,
            near_plane: 0.01,
            far_plane: 100.0,
        }
    }
}

/// Spawn-on-keypress tuning
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    /// Minimum time between two accepted spawns
    pub cooldown: Duration,
    /// Distance in front of the camera where new models appear
    pub distance: f32,
    /// Scale given to spawned models
    pub scale: Vec3,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(3),
            distance: 3.0,
            scale: Vec3::ONE,
        }
    }
}

/// Orbit animation tuning
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    /// Number of instances evenly spaced on the circle
    pub instance_count: u32,
    /// Circle radius in the XY plane
    pub radius: f32,
    /// Z coordinate of the circle
    pub depth: f32,
    /// Angular speed
    pub degrees_per_second: f32,
    /// Uniform scale of each instance
    pub scale: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            instance_count: 3,
            radius: 6.5,
            depth: -5.0,
            degrees_per_second: 65.0,
            scale: 9.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    /// Framebuffer width in pixels
    pub window_width: u32,
    /// Framebuffer height in pixels
    pub window_height: u32,
    /// Degrees-before-sensitivity applied per rotation key event
    pub rotation_step: f32,
    /// Lowest severity printed by the default logger
    pub log_level: LogSeverity,
    pub camera: CameraConfig,
    pub spawn: SpawnConfig,
    /// `None` disables the orbit animation
    pub orbit: Option<OrbitConfig>,
}

impl LabConfig {
    /// Width / height, falling back to 1.0 for a zero-height window
    pub fn aspect_ratio(&self) -> f32 {
        if self.window_height == 0 {
            return 1.0;
        }
        self.window_width as f32 / self.window_height as f32
    }

    /// Console logger filtered at `log_level`, ready for `Engine::set_logger`
    pub fn logger(&self) -> DefaultLogger {
        DefaultLogger::with_min_severity(self.log_level)
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 800,
            rotation_step: 10.0,
            log_level: LogSeverity::Debug,
            camera: CameraConfig::default(),
            spawn: SpawnConfig::default(),
            orbit: None,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
