//! Convolution operations
//!
//! Implements image convolution with arbitrary kernels.
//!
//! Uses toroidal (wrap-around) border handling: a neighborhood read that
//! falls off one edge of the image re-enters from the opposite edge, as if
//! the image tiled the plane infinitely. This is a deliberate boundary
//! policy, not zero-padding or edge replication.

use crate::{FilterResult, Kernel};
use rasterkit_core::{Pixel, PixelBuffer};

/// Convolve an RGB image with a kernel.
///
/// Each channel is accumulated independently over the kernel window, then
/// clamped to [0, 255] and truncated to an integer. The output is always a
/// fresh buffer of identical dimensions; convolution never runs in place,
/// since later output pixels must not see already-updated neighbors.
///
/// An all-zero kernel is valid and produces an all-black image.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernelShape`](crate::FilterError::InvalidKernelShape)
/// if either kernel dimension is even or zero.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    kernel.check_shape()?;

    let w = src.width();
    let h = src.height();
    let half_w = kernel.half_width() as i64;
    let half_h = kernel.half_height() as i64;

    let mut out = Vec::with_capacity(w as usize * h as usize);

    for y in 0..h {
        for x in 0..w {
            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;

            for ky in 0..kernel.height() {
                for kx in 0..kernel.width() {
                    let sx = x as i64 + kx as i64 - half_w;
                    let sy = y as i64 + ky as i64 - half_h;

                    let pixel = src.get_wrapped(sx, sy);
                    let k = kernel.get(kx, ky);

                    sum_r += pixel.r as f32 * k;
                    sum_g += pixel.g as f32 * k;
                    sum_b += pixel.b as f32 * k;
                }
            }

            // clamp then truncate toward zero
            out.push(Pixel::new(
                sum_r.clamp(0.0, 255.0) as u8,
                sum_g.clamp(0.0, 255.0) as u8,
                sum_b.clamp(0.0, 255.0) as u8,
            ));
        }
    }

    Ok(PixelBuffer::from_pixels(w, h, out)?)
}

/// Apply a box (average) blur of the given radius.
///
/// Radius 0 is the identity transform.
pub fn box_blur(src: &PixelBuffer, radius: u32) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::box_blur(radius))
}

/// Apply the fixed 7x7 Gaussian blur.
pub fn gaussian_blur(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::gaussian())
}

/// Apply the fixed 3x3 Laplacian edge-detection filter.
///
/// On a uniform image the result is all black (kernel weights sum to 0).
pub fn edge_detect(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::edge_detection())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::Pixel;

    #[test]
    fn test_identity_kernel() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        buf.set(1, 2, Pixel::new(7, 80, 201)).unwrap();
        let kernel = Kernel::new(1, 1, vec![1.0]).unwrap();
        let out = convolve(&buf, &kernel).unwrap();
        assert_eq!(out, buf);
    }

    #[test]
    fn test_all_zero_kernel_is_black() {
        let buf = PixelBuffer::filled(4, 3, Pixel::WHITE).unwrap();
        let kernel = Kernel::new(3, 3, vec![0.0; 9]).unwrap();
        let out = convolve(&buf, &kernel).unwrap();
        assert!(out.pixels().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn test_toroidal_wrap_on_2x2() {
        // Mark (1, 1); a 3x3 kernel weighting only the upper-left neighbor
        // must pick it up at output (0, 0) by wrapping both axes.
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set(1, 1, Pixel::new(100, 150, 200)).unwrap();

        let mut weights = vec![0.0f32; 9];
        weights[0] = 1.0; // offset (-1, -1)
        let kernel = Kernel::new(3, 3, weights).unwrap();

        let out = convolve(&buf, &kernel).unwrap();
        assert_eq!(out.get(0, 0), Some(Pixel::new(100, 150, 200)));
        // (1, 1) sees its upper-left neighbor (0, 0), which is black
        assert_eq!(out.get(1, 1), Some(Pixel::BLACK));
    }

    #[test]
    fn test_negative_sums_clamp_to_zero() {
        let buf = PixelBuffer::filled(3, 3, Pixel::gray(10)).unwrap();
        let kernel = Kernel::new(1, 1, vec![-1.0]).unwrap();
        let out = convolve(&buf, &kernel).unwrap();
        assert!(out.pixels().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn test_box_blur_radius_zero_is_identity() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        buf.set(0, 1, Pixel::new(1, 2, 3)).unwrap();
        let out = box_blur(&buf, 0).unwrap();
        assert_eq!(out, buf);
    }

    #[test]
    fn test_box_blur_averages_neighborhood() {
        // 3x3 image, one white pixel: radius-1 box blur spreads 255/9 = 28
        // (truncated) to every output pixel via wrap-around.
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        buf.set(1, 1, Pixel::WHITE).unwrap();
        let out = box_blur(&buf, 1).unwrap();
        assert!(out.pixels().iter().all(|&p| p == Pixel::gray(28)));
    }

    #[test]
    fn test_edge_detect_uniform_is_black() {
        for (w, h) in [(1, 1), (2, 2), (5, 4)] {
            let buf = PixelBuffer::filled(w, h, Pixel::new(37, 120, 250)).unwrap();
            let out = edge_detect(&buf).unwrap();
            assert!(out.pixels().iter().all(|&p| p == Pixel::BLACK));
        }
    }
}
