/// Transformable - per-instance position, Euler rotation and scale.
///
/// Geometry is not owned here: every instance draws through the shared
/// `MeshRegistry` it is handed.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::rasterizer::Rasterizer;
use crate::resource::MeshRegistry;

/// Local transform of one model instance.
///
/// Defaults: position at the origin, no rotation, unit scale.
/// A zero scale is accepted and collapses the mesh to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformable {
    position: Vec3,
    /// Degrees about X, Y, Z
    rotation_degrees: Vec3,
    scale: Vec3,
}

impl Transformable {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation_degrees: Vec3) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation_degrees
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation_degrees: Vec3) {
        self.rotation_degrees = rotation_degrees;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Offset the position
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Add per-axis degrees to the rotation
    pub fn rotate(&mut self, delta_degrees: Vec3) {
        self.rotation_degrees += delta_degrees;
    }

    /// World matrix: T · Rx · Ry · Rz · S.
    ///
    /// The order is fixed. A local point is scaled first, then rotated about
    /// Z, Y and X, then translated.
    pub fn transform_matrix(&self) -> Mat4 {
        let radians = Vec3::new(
            self.rotation_degrees.x.to_radians(),
            self.rotation_degrees.y.to_radians(),
            self.rotation_degrees.z.to_radians(),
        );

        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(radians.x)
            * Mat4::from_rotation_y(radians.y)
            * Mat4::from_rotation_z(radians.z)
            * Mat4::from_scale(self.scale)
    }

    /// Draw this instance with the shared mesh.
    ///
    /// No-op when the registry holds no mesh.
    pub fn draw(&self, registry: &MeshRegistry, rasterizer: &mut dyn Rasterizer) -> Result<()> {
        registry.draw(rasterizer, &self.transform_matrix())
    }
}

impl Default for Transformable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "transformable_tests.rs"]
mod tests;
