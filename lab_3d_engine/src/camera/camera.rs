/// Camera - first-person yaw/pitch camera.
///
/// Holds position and orientation, and derives view and projection
/// matrices on demand. The basis vectors are never set directly: they are
/// recomputed whenever yaw or pitch change.
///
/// The engine does NOT store cameras. The application owns one for its whole
/// lifetime and mutates it from input handling.

use glam::{Mat4, Vec3};
use crate::config::CameraConfig;

/// Pitch limit in degrees. Looking straight up or down would make
/// `front` parallel to `world_up` and collapse the basis.
pub const PITCH_LIMIT: f32 = 89.0;

/// First-person camera.
///
/// Invariant: `front`, `right`, `up` are unit length, mutually orthogonal,
/// and consistent with the current yaw/pitch.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,

    // Degrees
    yaw: f32,
    pitch: f32,

    // Derived
    front: Vec3,
    right: Vec3,
    up: Vec3,

    sensitivity: f32,
    speed: f32,

    fov_degrees: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
}

impl Camera {
    /// Create a camera at `position` with the default tuning.
    ///
    /// Starts with yaw -90° (looking down -Z) and pitch 0.
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        Self::from_config(&CameraConfig {
            position,
            world_up,
            ..CameraConfig::default()
        }, 1.0)
    }

    /// Create a camera from a config block and a viewport aspect ratio.
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position: config.position,
            world_up: config.world_up.normalize_or(Vec3::Y),
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            sensitivity: config.sensitivity,
            speed: config.speed,
            fov_degrees: config.fov_degrees,
            aspect_ratio,
            near_plane: config.near_plane,
            far_plane: config.far_plane,
        };
        camera.update_basis();
        camera
    }

    fn update_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(pitch_cos * yaw_cos, pitch_sin, pitch_cos * yaw_sin).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    // ===== MOVEMENT =====

    /// Move along `front`. Positive is forward.
    pub fn move_forward(&mut self, amount: f32) {
        self.position += self.front * amount * self.speed;
    }

    /// Strafe along `right`. Positive is right.
    pub fn move_right(&mut self, amount: f32) {
        self.position += self.right * amount * self.speed;
    }

    /// Move along the world up vector. Positive is up.
    pub fn move_up(&mut self, amount: f32) {
        self.position += self.world_up * amount * self.speed;
    }

    // ===== ROTATION =====

    /// Add sensitivity-scaled deltas to yaw and pitch, clamping pitch.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta * self.sensitivity;
        self.pitch = (self.pitch + pitch_delta * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Set yaw and pitch directly (degrees, unscaled). Pitch is clamped.
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    // ===== MATRICES =====

    /// Look-at from `position` toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective with OpenGL clip depth (-1..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }

    /// projection * view
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees (unbounded)
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within ±PITCH_LIMIT
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// (near, far)
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near_plane, self.far_plane)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
    }

    /// Typically called on window resize with width / height.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn set_clip_planes(&mut self, near_plane: f32, far_plane: f32) {
        self.near_plane = near_plane;
        self.far_plane = far_plane;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 1.0)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
