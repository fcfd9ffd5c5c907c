/// Rasterizer trait - what the core needs from a graphics backend
///
/// The core never compiles shaders or binds programs. It uploads one mesh,
/// writes column-major 4x4 matrices into named uniform slots, and issues
/// indexed triangle draws. An OpenGL backend maps these onto
/// VAO/VBO/EBO creation, `glUniformMatrix4fv` and `glDrawElements`.

use glam::Mat4;
use crate::error::Result;

/// Number of floats per vertex (x, y, z)
pub const VERTEX_STRIDE: usize = 3;

/// Opaque handle to geometry uploaded through a `Rasterizer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u32);

impl MeshHandle {
    /// Wrap a backend id (e.g. a GL vertex array name)
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Backend id
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Named matrix uniforms the shaders read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSlot {
    /// Per-instance world matrix
    Transform,
    /// Camera view matrix
    View,
    /// Camera projection matrix
    Projection,
}

impl UniformSlot {
    /// Uniform name as declared in the vertex shader
    pub fn name(self) -> &'static str {
        match self {
            UniformSlot::Transform => "transform",
            UniformSlot::View => "view",
            UniformSlot::Projection => "projection",
        }
    }
}

/// Geometry to upload
///
/// `vertices` is a flat position array (`VERTEX_STRIDE` floats per vertex,
/// attribute location 0). `indices` are offsets into it, three per triangle.
#[derive(Debug, Clone, Copy)]
pub struct MeshUploadDesc<'a> {
    pub vertices: &'a [f32],
    pub indices: &'a [u32],
}

impl MeshUploadDesc<'_> {
    /// Number of vertices (not floats)
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / VERTEX_STRIDE) as u32
    }

    /// Number of indices
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Rasterizer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterizerStats {
    /// Indexed draws issued
    pub draw_calls: u32,
    /// Triangles submitted
    pub triangles: u32,
    /// Meshes uploaded and not yet released
    pub live_meshes: u32,
}

/// Graphics backend used by the mesh registry and the scene
///
/// Implemented by the application (OpenGL, Vulkan, ...) and by the
/// test-only mock.
pub trait Rasterizer: Send + Sync {
    /// Upload vertex and index data once
    ///
    /// # Returns
    ///
    /// A handle to bind before drawing
    fn upload_mesh(&mut self, desc: MeshUploadDesc<'_>) -> Result<MeshHandle>;

    /// Free uploaded geometry. Unknown handles are ignored.
    fn release_mesh(&mut self, handle: MeshHandle);

    /// Write raw bytes into a uniform slot
    ///
    /// # Arguments
    ///
    /// * `slot` - Target uniform
    /// * `data` - 64 bytes: a column-major 4x4 f32 matrix
    fn write_uniform(&mut self, slot: UniformSlot, data: &[u8]) -> Result<()>;

    /// Make `handle` the active mesh for subsequent draws
    fn bind_mesh(&mut self, handle: MeshHandle) -> Result<()>;

    /// Draw triangles from the bound mesh's index buffer
    ///
    /// # Arguments
    ///
    /// * `index_count` - Number of indices to draw
    /// * `first_index` - Offset of the first index
    fn draw_indexed(&mut self, index_count: u32, first_index: u32) -> Result<()>;

    /// Counters since creation
    fn stats(&self) -> RasterizerStats;

    /// Write a matrix into a uniform slot (column-major)
    fn write_matrix(&mut self, slot: UniformSlot, matrix: &Mat4) -> Result<()> {
        self.write_uniform(slot, bytemuck::bytes_of(matrix))
    }
}
