//! Error types for the Lab3D engine
//!
//! The transform core (camera, transformable, mesh registry) has no error
//! paths of its own. Errors come from collaborators: the rasterizer backend
//! and the geometry handed over by an asset loader.

use std::fmt;

/// Result type for Lab3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lab3D engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rasterizer backend error (OpenGL, Vulkan, mock, ...)
    BackendError(String),

    /// Invalid resource (mesh data, handle, uniform payload)
    InvalidResource(String),

    /// Initialization failed (context, program, startup assets)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build a `BackendError`, logging it at ERROR level with file:line.
///
/// # Example
///
/// ```no_run
/// # use lab_3d_engine::engine_err;
/// let err = engine_err!("lab3d::gl", "glBufferData failed: {}", 1282);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::lab3d::Error::BackendError(message)
    }};
}

/// Log and return a `BackendError` from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
