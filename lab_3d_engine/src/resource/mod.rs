//! Resource module
//!
//! CPU-side mesh data and the shared mesh registry every model draws through.

mod mesh_data;
mod mesh_registry;

pub use mesh_data::MeshData;
pub use mesh_registry::MeshRegistry;
