//! Rasterkit - Spatial filter engine for 8-bit RGB raster images
//!
//! # Overview
//!
//! Rasterkit applies spatial filters to an in-memory raster:
//!
//! - Convolution filters (box blur, Gaussian blur, edge detection) with
//!   toroidal boundary handling
//! - Point transforms (gamma correction, grayscale conversion)
//! - A fixed-order pipeline driven by per-filter enable flags
//!
//! The engine is pure and synchronous: it performs no file or network
//! I/O. The surrounding application decodes an image into a
//! [`PixelBuffer`], runs the pipeline, and encodes the result.
//!
//! # Example
//!
//! ```
//! use rasterkit::{Pixel, PixelBuffer};
//! use rasterkit::filter::{self, FilterOptions};
//!
//! let image = PixelBuffer::filled(4, 4, Pixel::new(255, 0, 0)).unwrap();
//! let options = FilterOptions {
//!     grayscale: true,
//!     ..FilterOptions::default()
//! };
//! let result = filter::run(&image, &options).unwrap();
//! assert_eq!(result.pixels()[0], Pixel::new(85, 85, 85));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export the filter engine as a module
pub use rasterkit_filter as filter;
