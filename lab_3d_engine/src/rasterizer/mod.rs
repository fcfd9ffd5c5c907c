/// Rasterizer module - the seam between the transform core and a GPU backend

pub mod rasterizer;

pub use rasterizer::*;

// Mock rasterizer for tests (no GPU required)
#[cfg(test)]
pub mod mock_rasterizer;
