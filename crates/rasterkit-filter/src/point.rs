//! Point transforms
//!
//! Filters computed independently per pixel, with no dependence on
//! neighboring pixels: gamma correction and grayscale conversion. Every
//! transform returns a new buffer; the pipeline performs exactly one
//! defensive copy at entry, so no stage mutates its input.

use crate::{FilterError, FilterResult};
use rasterkit_core::{Pixel, PixelBuffer};

/// Apply power-law gamma correction to every channel.
///
/// Each channel value `c` becomes `clamp(round(c^gamma), 0, 255)`,
/// computed through a 256-entry lookup table built once per call. The
/// power law is applied to the raw 8-bit value, not a normalized one, so
/// gamma above 1.0 drives channels toward saturation and gamma below 1.0
/// compresses them toward 1. Gamma 1.0 is the exact identity. `0^0` is
/// pinned to 1, so gamma 0 maps every channel, including 0, to 1.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `gamma` is negative or
/// not finite.
pub fn gamma_correct(src: &PixelBuffer, gamma: f32) -> FilterResult<PixelBuffer> {
    let lut = gamma_lut(gamma)?;

    let pixels = src
        .pixels()
        .iter()
        .map(|p| Pixel::new(lut[p.r as usize], lut[p.g as usize], lut[p.b as usize]))
        .collect();

    Ok(PixelBuffer::from_pixels(src.width(), src.height(), pixels)?)
}

/// Build the 256-entry channel remap table for a gamma value.
fn gamma_lut(gamma: f32) -> FilterResult<[u8; 256]> {
    if !gamma.is_finite() || gamma < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gamma must be finite and >= 0.0, got {gamma}"
        )));
    }

    let mut lut = [0u8; 256];
    // 0^0 is defined as 1 here, not left to powf
    lut[0] = if gamma == 0.0 { 1 } else { 0 };
    for (c, entry) in lut.iter_mut().enumerate().skip(1) {
        *entry = (c as f32).powf(gamma).round().clamp(0.0, 255.0) as u8;
    }
    Ok(lut)
}

/// Convert to grayscale by channel averaging.
///
/// Every channel of every pixel is replaced by `(r + g + b) / 3` with
/// integer truncation. The buffer model carries no alpha channel; callers
/// that re-encode into a format with opacity must emit the result fully
/// opaque, matching what this stage flattens.
pub fn grayscale(src: &PixelBuffer) -> PixelBuffer {
    let pixels = src
        .pixels()
        .iter()
        .map(|p| {
            let avg = ((p.r as u16 + p.g as u16 + p.b as u16) / 3) as u8;
            Pixel::gray(avg)
        })
        .collect();

    // dimensions come from a valid buffer, so this cannot fail
    PixelBuffer::from_pixels(src.width(), src.height(), pixels).unwrap()
}
