//! Convolution integration tests
//!
//! Exercises the convolution engine's defined properties: identity
//! kernels, the toroidal boundary policy, degenerate kernels, and shape
//! validation.

use rasterkit_core::{Pixel, PixelBuffer};
use rasterkit_filter::{FilterError, Kernel, box_blur, convolve, edge_detect, gaussian_blur};
use rasterkit_test::{gradient, max_channel_diff, random_buffer, solid};

#[test]
fn identity_kernel_preserves_every_pixel() {
    let kernel = Kernel::new(1, 1, vec![1.0]).expect("1x1 kernel");

    // --- Test 1: deterministic gradient ---
    let buf = gradient(17, 9);
    let out = convolve(&buf, &kernel).expect("convolve identity");
    assert_eq!(out, buf);

    // --- Test 2: seeded noise ---
    for seed in [1, 42, 1234] {
        let buf = random_buffer(32, 24, seed);
        let out = convolve(&buf, &kernel).expect("convolve identity");
        assert_eq!(max_channel_diff(&buf, &out), 0);
    }
}

#[test]
fn box_blur_radius_zero_is_identity() {
    let buf = random_buffer(13, 7, 7);
    let out = box_blur(&buf, 0).expect("radius-0 box blur");
    assert_eq!(out, buf);
}

#[test]
fn edge_detection_on_uniform_image_is_black() {
    for (w, h) in [(1, 1), (2, 3), (16, 16)] {
        let buf = solid(w, h, Pixel::new(123, 45, 250));
        let out = edge_detect(&buf).expect("edge detect");
        assert!(
            out.pixels().iter().all(|&p| p == Pixel::BLACK),
            "non-black output for {w}x{h} uniform image"
        );
    }
}

#[test]
fn toroidal_wrap_reads_opposite_corner() {
    // On a 2x2 image the upper-left neighbor of (0, 0) is (1, 1), wrapping
    // in both axes simultaneously.
    let mut buf = PixelBuffer::new(2, 2).expect("2x2 buffer");
    buf.set(1, 1, Pixel::new(200, 100, 50)).expect("set corner");

    let mut weights = vec![0.0f32; 9];
    weights[0] = 1.0; // kernel cell for offset (-1, -1)
    let kernel = Kernel::new(3, 3, weights).expect("3x3 kernel");

    let out = convolve(&buf, &kernel).expect("convolve");
    assert_eq!(out.get(0, 0), Some(Pixel::new(200, 100, 50)));
}

#[test]
fn all_zero_kernel_yields_black() {
    let buf = random_buffer(8, 8, 99);
    let kernel = Kernel::new(5, 5, vec![0.0; 25]).expect("zero kernel");
    let out = convolve(&buf, &kernel).expect("convolve zero kernel");
    assert!(out.pixels().iter().all(|&p| p == Pixel::BLACK));
}

#[test]
fn even_kernel_shape_is_rejected() {
    let result = Kernel::new(2, 2, vec![0.25; 4]);
    assert!(matches!(
        result,
        Err(FilterError::InvalidKernelShape { width: 2, height: 2 })
    ));
}

#[test]
fn blur_preserves_dimensions_and_stays_in_range() {
    let buf = random_buffer(21, 14, 5);

    let boxed = box_blur(&buf, 3).expect("box blur");
    assert_eq!((boxed.width(), boxed.height()), (21, 14));

    let gauss = gaussian_blur(&buf).expect("gaussian blur");
    assert_eq!((gauss.width(), gauss.height()), (21, 14));

    // normalized kernels never push a blurred pixel outside the input's
    // channel extremes
    let max_in = buf.pixels().iter().map(|p| p.r).max().unwrap();
    let min_in = buf.pixels().iter().map(|p| p.r).min().unwrap();
    for p in gauss.pixels() {
        assert!(p.r >= min_in.saturating_sub(1));
        assert!(p.r <= max_in.saturating_add(1));
    }
}

#[test]
fn repeated_blur_converges_toward_uniform() {
    // Box blur averages; applying it repeatedly must not increase the
    // spread of channel values.
    let mut buf = gradient(10, 10);
    let spread = |b: &PixelBuffer| {
        let max = b.pixels().iter().map(|p| p.g).max().unwrap();
        let min = b.pixels().iter().map(|p| p.g).min().unwrap();
        max - min
    };
    let mut prev = spread(&buf);
    for _ in 0..3 {
        buf = box_blur(&buf, 1).expect("box blur");
        let next = spread(&buf);
        assert!(next <= prev);
        prev = next;
    }
}
