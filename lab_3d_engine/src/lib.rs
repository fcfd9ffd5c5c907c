/*!
# Lab 3D Engine

Core of a small interactive 3D lab: a fly camera, per-instance model
transforms, a shared mesh registry and keyboard-driven spawning.

Window creation, shader compilation and GPU buffer management are left to a
backend. The core talks to it through the `Rasterizer` trait and only hands
over vertex data, column-major matrices and indexed draw calls.

## Architecture

- **Camera**: yaw/pitch fly camera producing view and projection matrices
- **Transformable**: position, Euler rotation and scale of one instance
- **MeshRegistry**: the one mesh every instance draws (uploaded once)
- **Scene**: camera, spawned models and animated instances
- **InputController**: winit keys to camera motion and model spawning
- **Rasterizer**: backend trait receiving uploads, uniforms and draws

A frame is: handle input, `scene.update(elapsed)`, `scene.render(&registry, rasterizer)`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod camera;
pub mod rasterizer;
pub mod resource;
pub mod scene;
pub mod input;

// Main lab3d namespace module
pub mod lab3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging)
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{LabConfig, CameraConfig, SpawnConfig, OrbitConfig};

    // Backend trait
    pub use crate::rasterizer::Rasterizer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Rasterizer sub-module with the backend-facing types
    pub mod render {
        pub use crate::rasterizer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }
}

// Re-export math and windowing libraries at crate root
pub use glam;
pub use winit;
