//! Shared mesh registry (flyweight).
//!
//! Every model instance in a run renders the same asset, so the geometry is
//! uploaded once and referenced by all of them. The registry is an explicit
//! object owned by the application and passed into every draw.
//!
//! # Lifecycle
//!
//! ```text
//! startup:   loader -> MeshData -> registry.initialize()
//! per frame: instance.draw(&registry, rasterizer)   (read-only)
//! shutdown:  registry.release()                      (idempotent)
//! ```

use glam::Mat4;
use crate::error::Result;
use crate::rasterizer::{MeshHandle, MeshUploadDesc, Rasterizer, UniformSlot, VERTEX_STRIDE};
use crate::{engine_debug, engine_info, engine_warn};
use super::mesh_data::MeshData;

#[derive(Debug, Clone, Copy)]
struct SharedMesh {
    handle: MeshHandle,
    vertex_count: u32,
    index_count: u32,
}

/// Holds at most one uploaded mesh shared by all `Transformable`s.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    mesh: Option<SharedMesh>,
}

impl MeshRegistry {
    /// Create an empty registry. Draws are no-ops until `initialize`.
    pub fn new() -> Self {
        Self { mesh: None }
    }

    /// Upload the shared geometry.
    ///
    /// Empty vertex or index data is tolerated as a caller mistake: it is
    /// logged and nothing happens. So is a vertex array whose length is not
    /// a multiple of 3. A previously uploaded mesh is released first.
    ///
    /// # Errors
    ///
    /// Only rasterizer failures (the upload itself) are returned.
    pub fn initialize(
        &mut self,
        rasterizer: &mut dyn Rasterizer,
        vertices: &[f32],
        indices: &[u32],
    ) -> Result<()> {
        if vertices.is_empty() || indices.is_empty() {
            engine_warn!("lab3d::MeshRegistry",
                "Ignoring mesh upload with {} floats and {} indices", vertices.len(), indices.len());
            return Ok(());
        }
        if vertices.len() % VERTEX_STRIDE != 0 {
            engine_warn!("lab3d::MeshRegistry",
                "Ignoring mesh upload: {} floats is not a whole number of xyz vertices", vertices.len());
            return Ok(());
        }

        if self.mesh.is_some() {
            engine_debug!("lab3d::MeshRegistry", "Replacing shared mesh");
            self.release(rasterizer);
        }

        let desc = MeshUploadDesc { vertices, indices };
        let handle = rasterizer.upload_mesh(desc)?;
        self.mesh = Some(SharedMesh {
            handle,
            vertex_count: desc.vertex_count(),
            index_count: desc.index_count(),
        });

        engine_info!("lab3d::MeshRegistry", "Shared mesh {} uploaded ({} vertices, {} indices)",
            handle.id(), desc.vertex_count(), desc.index_count());
        Ok(())
    }

    /// Upload loader output. Same tolerance rules as `initialize`.
    pub fn initialize_from(&mut self, rasterizer: &mut dyn Rasterizer, data: &MeshData) -> Result<()> {
        self.initialize(rasterizer, data.positions(), data.indices())
    }

    /// Draw one instance of the shared mesh.
    ///
    /// Writes `transform` to the transform uniform, binds the mesh and issues
    /// one indexed draw. No-op if nothing is uploaded.
    pub fn draw(&self, rasterizer: &mut dyn Rasterizer, transform: &Mat4) -> Result<()> {
        let Some(mesh) = self.mesh else {
            return Ok(());
        };
        if mesh.index_count == 0 {
            return Ok(());
        }

        rasterizer.write_matrix(UniformSlot::Transform, transform)?;
        rasterizer.bind_mesh(mesh.handle)?;
        rasterizer.draw_indexed(mesh.index_count, 0)
    }

    /// Free the shared geometry. Safe to call any number of times.
    pub fn release(&mut self, rasterizer: &mut dyn Rasterizer) {
        if let Some(mesh) = self.mesh.take() {
            rasterizer.release_mesh(mesh.handle);
            engine_info!("lab3d::MeshRegistry", "Shared mesh {} released", mesh.handle.id());
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn handle(&self) -> Option<MeshHandle> {
        self.mesh.map(|m| m.handle)
    }

    /// 0 when empty
    pub fn vertex_count(&self) -> u32 {
        self.mesh.map_or(0, |m| m.vertex_count)
    }

    /// 0 when empty
    pub fn index_count(&self) -> u32 {
        self.mesh.map_or(0, |m| m.index_count)
    }
}

impl Drop for MeshRegistry {
    fn drop(&mut self) {
        if let Some(mesh) = self.mesh {
            engine_warn!("lab3d::MeshRegistry",
                "Registry dropped while mesh {} is still uploaded; call release() before shutdown",
                mesh.handle.id());
        }
    }
}

#[cfg(test)]
#[path = "mesh_registry_tests.rs"]
mod tests;
