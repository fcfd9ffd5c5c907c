//! CPU-side mesh data.
//!
//! `MeshData` is what a geometry loader hands over: a flat xyz position
//! array and a triangle index array. The procedural generators build simple
//! shapes without a loader.

use std::f32::consts::TAU;
use crate::error::{Error, Result};
use crate::rasterizer::VERTEX_STRIDE;

/// Flat positions (3 floats per vertex) plus triangle indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    positions: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshData {
    /// Wrap loader output without checking it. See `validate`.
    pub fn new(positions: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / VERTEX_STRIDE
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    /// Check the loader contract: whole xyz vertices, whole triangles, and
    /// every index inside the position array.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() % VERTEX_STRIDE != 0 {
            return Err(Error::InvalidResource(format!(
                "{} position floats is not a multiple of {}", self.positions.len(), VERTEX_STRIDE
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(Error::InvalidResource(format!(
                "{} indices do not form whole triangles", self.indices.len()
            )));
        }
        let vertex_count = self.vertex_count();
        if let Some((at, index)) = self.indices.iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertex_count)
        {
            return Err(Error::InvalidResource(format!(
                "index {} at position {} is out of range for {} vertices", index, at, vertex_count
            )));
        }
        Ok(())
    }

    // ===== PROCEDURAL SHAPES =====

    /// Regular polygon in the XY plane, as a triangle fan around the origin.
    ///
    /// Vertex 0 is the centre; rim vertex `k` sits at angle `k * 360 / sides`
    /// starting from +X. Fewer than 3 sides yields an empty mesh.
    pub fn regular_polygon(sides: u32, radius: f32) -> Self {
        if sides < 3 {
            return Self::default();
        }

        let mut positions = Vec::with_capacity((sides as usize + 1) * VERTEX_STRIDE);
        positions.extend_from_slice(&[0.0, 0.0, 0.0]);
        for k in 0..sides {
            let (sin, cos) = (TAU * k as f32 / sides as f32).sin_cos();
            positions.extend_from_slice(&[radius * cos, radius * sin, 0.0]);
        }

        let mut indices = Vec::with_capacity(sides as usize * 3);
        for k in 0..sides {
            let next = (k + 1) % sides;
            indices.extend_from_slice(&[0, k + 1, next + 1]);
        }

        Self { positions, indices }
    }

    /// Axis-aligned cube centred on the origin, 8 shared corners.
    ///
    /// Triangles wind counter-clockwise seen from outside.
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent;
        #[rustfmt::skip]
        let positions = vec![
            -h, -h,  h,   h, -h,  h,   h,  h,  h,  -h,  h,  h, // front (z+)
            -h, -h, -h,   h, -h, -h,   h,  h, -h,  -h,  h, -h, // back  (z-)
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2,  2, 3, 0, // front
            1, 5, 6,  6, 2, 1, // right
            5, 4, 7,  7, 6, 5, // back
            4, 0, 3,  3, 7, 4, // left
            3, 2, 6,  6, 7, 3, // top
            4, 5, 1,  1, 0, 4, // bottom
        ];
        Self { positions, indices }
    }
}

#[cfg(test)]
#[path = "mesh_data_tests.rs"]
mod tests;
