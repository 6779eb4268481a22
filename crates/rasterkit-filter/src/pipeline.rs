//! Filter pipeline
//!
//! Orchestrates the ordered application of the convolution filters and
//! point transforms according to per-stage enable flags. The pipeline is
//! stateless across runs: each invocation copies the caller's buffer once
//! at entry and threads that copy through the enabled stages, so the
//! original is never mutated.

use crate::{FilterResult, convolve, point};
use rasterkit_core::PixelBuffer;

/// Box blur radius used by the pipeline.
///
/// The convolution API accepts an arbitrary radius; the pipeline contract
/// fixes it at 3.
pub const BOX_BLUR_RADIUS: u32 = 3;

/// Per-run filter selection and parameters.
///
/// Transient value supplied by the caller for one pipeline run. The
/// surrounding application maps its controls onto this: checkboxes onto
/// the booleans, a bounded slider linearly onto `gamma` in `[0.0, 2.0]`.
/// The engine itself accepts any finite gamma >= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// Apply the radius-3 box blur.
    pub box_blur: bool,
    /// Apply the fixed 7x7 Gaussian blur.
    pub gaussian_blur: bool,
    /// Apply the 3x3 Laplacian edge-detection filter.
    pub edge_detection: bool,
    /// Flatten to grayscale as the final stage.
    pub grayscale: bool,
    /// Gamma exponent; always applied. 1.0 is the identity.
    pub gamma: f32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            box_blur: false,
            gaussian_blur: false,
            edge_detection: false,
            grayscale: false,
            gamma: 1.0,
        }
    }
}

/// Run the filter pipeline over an image.
///
/// Stage order is fixed:
///
/// 1. Defensive copy of `original`
/// 2. Box blur (radius [`BOX_BLUR_RADIUS`]), if enabled
/// 3. Gaussian blur, if enabled
/// 4. Edge detection, if enabled
/// 5. Gamma correction, always
/// 6. Grayscale, if enabled, so it flattens the fully filtered image
///
/// Each stage consumes the previous stage's output; after the entry copy
/// the original buffer is never read again. The first failing stage aborts
/// the run with no partial output.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`](crate::FilterError::InvalidParameters)
/// if `options.gamma` is negative or not finite.
pub fn run(original: &PixelBuffer, options: &FilterOptions) -> FilterResult<PixelBuffer> {
    let mut img = original.clone();

    if options.box_blur {
        img = convolve::box_blur(&img, BOX_BLUR_RADIUS)?;
    }
    if options.gaussian_blur {
        img = convolve::gaussian_blur(&img)?;
    }
    if options.edge_detection {
        img = convolve::edge_detect(&img)?;
    }

    img = point::gamma_correct(&img, options.gamma)?;

    if options.grayscale {
        img = point::grayscale(&img);
    }

    Ok(img)
}
