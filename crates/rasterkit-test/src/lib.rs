//! rasterkit-test - Test support for the rasterkit filter engine
//!
//! The engine performs no file I/O, so test inputs are constructed in
//! memory: solid buffers, deterministic gradients, and seeded noise
//! buffers for property-style checks.

use rand::{RngExt, SeedableRng, rngs::StdRng};
use rasterkit_core::{Pixel, PixelBuffer};

/// Create a solid-color buffer.
///
/// # Panics
///
/// Panics if either dimension is zero; test inputs are fixed by the
/// test author.
pub fn solid(width: u32, height: u32, pixel: Pixel) -> PixelBuffer {
    PixelBuffer::filled(width, height, pixel).expect("valid test dimensions")
}

/// Create a deterministic gradient buffer.
///
/// Channels ramp with position: red over x, green over y, blue over both.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Pixel::new(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) % 256) as u8,
            ));
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).expect("valid test dimensions")
}

/// Create a reproducible noise buffer from a seed.
pub fn random_buffer(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels = (0..width as usize * height as usize)
        .map(|_| Pixel::new(rng.random(), rng.random(), rng.random()))
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).expect("valid test dimensions")
}

/// Largest per-channel absolute difference between two equal-sized buffers.
///
/// # Panics
///
/// Panics if the buffers differ in dimensions.
pub fn max_channel_diff(a: &PixelBuffer, b: &PixelBuffer) -> u8 {
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    a.pixels()
        .iter()
        .zip(b.pixels())
        .map(|(pa, pb)| {
            let dr = pa.r.abs_diff(pb.r);
            let dg = pa.g.abs_diff(pb.g);
            let db = pa.b.abs_diff(pb.b);
            dr.max(dg).max(db)
        })
        .max()
        .unwrap_or(0)
}
