//! rasterkit-filter - Spatial filtering operations
//!
//! This crate provides the filter engine for 8-bit RGB rasters:
//!
//! - Convolution with arbitrary kernels, toroidal border handling
//! - Blur presets (box blur, fixed 7x7 Gaussian blur)
//! - Edge detection (3x3 Laplacian)
//! - Point transforms (gamma correction, grayscale conversion)
//! - A fixed-order filter pipeline driven by per-stage enable flags

pub mod convolve;
mod error;
pub mod kernel;
pub mod pipeline;
pub mod point;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{box_blur, convolve, edge_detect, gaussian_blur};
pub use pipeline::{BOX_BLUR_RADIUS, FilterOptions, run};
pub use point::{gamma_correct, grayscale};
