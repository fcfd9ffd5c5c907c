#![allow(dead_code)]
//! Shared helpers for integration tests
//!
//! `RecordingRasterizer` implements the public `Rasterizer` trait the way a
//! backend would, keeping a log of draws instead of talking to a GPU.

use std::sync::{Arc, Mutex};
use lab_3d_engine::glam::Mat4;
use lab_3d_engine::lab3d::{Error, Rasterizer, Result};
use lab_3d_engine::lab3d::log::{LogEntry, Logger};
use lab_3d_engine::lab3d::render::{MeshHandle, MeshUploadDesc, RasterizerStats, UniformSlot};

/// One recorded indexed draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRecord {
    pub mesh: MeshHandle,
    pub index_count: u32,
    pub transform: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

#[derive(Debug, Default)]
pub struct RecordingRasterizer {
    pub draws: Vec<DrawRecord>,
    pub uploads: u32,
    pub releases: u32,
    live: Vec<(MeshHandle, u32)>,
    bound: Option<MeshHandle>,
    transform: Mat4,
    view: Mat4,
    projection: Mat4,
    stats: RasterizerStats,
}

impl RecordingRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget draws recorded so far (start of a new frame)
    pub fn begin_frame(&mut self) {
        self.draws.clear();
    }
}

impl Rasterizer for RecordingRasterizer {
    fn upload_mesh(&mut self, desc: MeshUploadDesc<'_>) -> Result<MeshHandle> {
        self.uploads += 1;
        let handle = MeshHandle::new(100 + self.uploads);
        self.live.push((handle, desc.index_count()));
        self.stats.live_meshes += 1;
        Ok(handle)
    }

    fn release_mesh(&mut self, handle: MeshHandle) {
        let before = self.live.len();
        self.live.retain(|(h, _)| *h != handle);
        if self.live.len() != before {
            self.releases += 1;
            self.stats.live_meshes -= 1;
        }
    }

    fn write_uniform(&mut self, slot: UniformSlot, data: &[u8]) -> Result<()> {
        let matrix: Mat4 = bytemuck::try_pod_read_unaligned(data)
            .map_err(|e| Error::InvalidResource(format!("{}: {:?}", slot.name(), e)))?;
        match slot {
            UniformSlot::Transform => self.transform = matrix,
            UniformSlot::View => self.view = matrix,
            UniformSlot::Projection => self.projection = matrix,
        }
        Ok(())
    }

    fn bind_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if !self.live.iter().any(|(h, _)| *h == handle) {
            return Err(Error::BackendError(format!("mesh {} is not live", handle.id())));
        }
        self.bound = Some(handle);
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, _first_index: u32) -> Result<()> {
        let mesh = self.bound
            .ok_or_else(|| Error::BackendError("no mesh bound".to_string()))?;
        self.stats.draw_calls += 1;
        self.stats.triangles += index_count / 3;
        self.draws.push(DrawRecord {
            mesh,
            index_count,
            transform: self.transform,
            view: self.view,
            projection: self.projection,
        });
        Ok(())
    }

    fn stats(&self) -> RasterizerStats {
        self.stats
    }
}

/// Logger that keeps every entry for later inspection
pub struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}
