//! PixelBuffer - the in-memory image container
//!
//! A `PixelBuffer` is a row-major array of 8-bit RGB pixels with strictly
//! positive dimensions. It is the only image representation the filter
//! engine operates on; decoding into it and encoding out of it belong to
//! the surrounding application.
//!
//! # Boundary model
//!
//! The buffer is toroidal for filter purposes: [`PixelBuffer::get_wrapped`]
//! reduces any signed coordinate with the Euclidean remainder, so a
//! neighborhood read can never go out of bounds. Plain [`PixelBuffer::get`]
//! and [`PixelBuffer::set`] stay bounds-checked for callers that want the
//! rectangular view.
//!
//! # Ownership model
//!
//! Buffers are plain owned values. `Clone` performs a deep copy; the filter
//! pipeline relies on exactly one such copy at entry to keep the caller's
//! original untouched.

use crate::error::{Error, Result};

/// One 8-bit RGB pixel.
///
/// Alpha is not modeled. Sources with an alpha channel must flatten or
/// preserve it in the I/O layer before and after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Pixel {
    /// All channels zero.
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    /// All channels 255.
    pub const WHITE: Pixel = Pixel { r: 255, g: 255, b: 255 };

    /// Create a pixel from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    /// Create a gray pixel with all three channels equal.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Pixel { r: v, g: v, b: v }
    }
}

/// A W x H raster of [`Pixel`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a black-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create a buffer filled with a single color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        })
    }

    /// Create a buffer from an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero,
    /// or [`Error::BadPixelCount`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BadPixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the row-major pixel data.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get the row-major pixel data mutably.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Get the pixel at a signed coordinate with toroidal wrap.
    ///
    /// Out-of-range coordinates wrap to the opposite edge, as if the image
    /// tiled the plane infinitely. Never fails, never reads out of bounds.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> Pixel {
        let wx = x.rem_euclid(self.width as i64) as u32;
        let wy = y.rem_euclid(self.height as i64) as u32;
        self.pixels[self.index(wx, wy)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
