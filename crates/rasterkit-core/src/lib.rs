//! rasterkit-core - Core data structures for the rasterkit filter engine
//!
//! This crate provides the in-memory image representation the filter
//! crates operate on:
//!
//! - [`PixelBuffer`] - a row-major raster of 8-bit RGB pixels
//! - [`Pixel`] - a single RGB triple
//! - [`Error`] / [`Result`] - the core error type
//!
//! The engine is pure: nothing in this workspace performs file or network
//! I/O. Decoding an image into a `PixelBuffer` and encoding a result back
//! out are owned by the surrounding application.

mod buffer;
mod error;

pub use buffer::{Pixel, PixelBuffer};
pub use error::{Error, Result};
