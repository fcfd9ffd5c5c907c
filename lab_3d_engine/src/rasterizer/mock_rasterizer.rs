/// Mock Rasterizer for unit tests (no GPU required)
///
/// Records every call as a string and keeps the last matrix written to each
/// uniform slot, so tests can assert on draw order and matrix contents.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::engine_bail;
use super::{MeshHandle, MeshUploadDesc, Rasterizer, RasterizerStats, UniformSlot};

/// Geometry sizes recorded at upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockMesh {
    pub vertex_count: u32,
    pub index_count: u32,
}

#[derive(Debug, Default)]
pub struct MockRasterizer {
    pub commands: Vec<String>,
    pub meshes: FxHashMap<MeshHandle, MockMesh>,
    pub uniforms: FxHashMap<UniformSlot, Mat4>,
    /// Transform uniform value at the time of each draw
    pub drawn_transforms: Vec<Mat4>,
    pub bound: Option<MeshHandle>,
    /// When set, upload_mesh fails with a BackendError
    pub fail_uploads: bool,
    next_id: u32,
    stats: RasterizerStats,
}

impl MockRasterizer {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Commands whose name starts with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn uniform(&self, slot: UniformSlot) -> Option<Mat4> {
        self.uniforms.get(&slot).copied()
    }
}

impl Rasterizer for MockRasterizer {
    fn upload_mesh(&mut self, desc: MeshUploadDesc<'_>) -> Result<MeshHandle> {
        if self.fail_uploads {
            engine_bail!("lab3d::MockRasterizer", "upload refused ({} indices)", desc.index_count());
        }
        let handle = MeshHandle::new(self.next_id);
        self.next_id += 1;
        self.meshes.insert(handle, MockMesh {
            vertex_count: desc.vertex_count(),
            index_count: desc.index_count(),
        });
        self.stats.live_meshes += 1;
        self.commands.push(format!("upload_mesh {}", handle.id()));
        Ok(handle)
    }

    fn release_mesh(&mut self, handle: MeshHandle) {
        if self.meshes.remove(&handle).is_some() {
            self.stats.live_meshes -= 1;
            if self.bound == Some(handle) {
                self.bound = None;
            }
            self.commands.push(format!("release_mesh {}", handle.id()));
        }
    }

    fn write_uniform(&mut self, slot: UniformSlot, data: &[u8]) -> Result<()> {
        if data.len() != std::mem::size_of::<Mat4>() {
            return Err(Error::InvalidResource(format!(
                "uniform '{}' expects 64 bytes, got {}", slot.name(), data.len()
            )));
        }
        let matrix: Mat4 = bytemuck::pod_read_unaligned(data);
        self.uniforms.insert(slot, matrix);
        self.commands.push(format!("write_uniform {}", slot.name()));
        Ok(())
    }

    fn bind_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if !self.meshes.contains_key(&handle) {
            engine_bail!("lab3d::MockRasterizer", "bind of unknown mesh {}", handle.id());
        }
        self.bound = Some(handle);
        self.commands.push(format!("bind_mesh {}", handle.id()));
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, first_index: u32) -> Result<()> {
        if self.bound.is_none() {
            engine_bail!("lab3d::MockRasterizer", "draw_indexed with no mesh bound");
        }
        self.stats.draw_calls += 1;
        self.stats.triangles += index_count / 3;
        self.drawn_transforms.push(self.uniform(UniformSlot::Transform).unwrap_or(Mat4::IDENTITY));
        self.commands.push(format!("draw_indexed {} {}", index_count, first_index));
        Ok(())
    }

    fn stats(&self) -> RasterizerStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "mock_rasterizer_tests.rs"]
mod tests;
