//! Error types for rasterkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Rasterkit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel vector length does not match width * height
    #[error("bad pixel count: expected {expected}, got {actual}")]
    BadPixelCount { expected: usize, actual: usize },

    /// Coordinates out of bounds
    #[error("coordinates out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for rasterkit core operations
pub type Result<T> = std::result::Result<T, Error>;
