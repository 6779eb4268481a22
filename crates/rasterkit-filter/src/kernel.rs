//! Convolution kernels
//!
//! Defines the kernel structure for image convolution and the factory
//! constructors for the shipped presets (box blur, Gaussian blur, edge
//! detection). Presets are valid by construction; only kernels built from
//! caller-supplied dimensions can fail validation.

use crate::{FilterError, FilterResult};

/// Fixed 7x7 Gaussian approximation. Weights sum to ~1.0; the table is
/// constant lookup data, not generated from a sigma parameter.
const GAUSSIAN_7X7: [f32; 49] = [
    0.000_000_67, 0.000_022_92, 0.000_191_17, 0.000_387_71, 0.000_191_17, 0.000_022_92, 0.000_000_67,
    0.000_022_92, 0.000_786_34, 0.006_559_65, 0.013_303_73, 0.006_559_65, 0.000_786_33, 0.000_022_92,
    0.000_191_17, 0.006_559_65, 0.054_721_57, 0.110_981_64, 0.054_721_57, 0.006_559_65, 0.000_191_17,
    0.000_387_71, 0.013_303_73, 0.110_981_64, 0.225_083_52, 0.110_981_64, 0.013_303_73, 0.000_387_71,
    0.000_191_17, 0.006_559_65, 0.054_721_57, 0.110_981_64, 0.054_721_57, 0.006_559_65, 0.000_191_17,
    0.000_022_92, 0.000_786_34, 0.006_559_65, 0.013_303_73, 0.006_559_65, 0.000_786_33, 0.000_022_92,
    0.000_000_67, 0.000_022_92, 0.000_191_17, 0.000_387_71, 0.000_191_17, 0.000_022_92, 0.000_000_67,
];

/// Fixed 3x3 Laplacian-style edge kernel. Weights sum to exactly 0, so a
/// uniform input convolves to black.
const EDGE_3X3: [f32; 9] = [
    -1.0, -1.0, -1.0, //
    -1.0, 8.0, -1.0, //
    -1.0, -1.0, -1.0,
];

/// A 2D convolution kernel
///
/// A rectangular matrix of floating-point weights with odd width and odd
/// height. The center offset on each axis is `dim / 2`. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernelShape`] if either dimension is
    /// even or zero, or [`FilterError::InvalidParameters`] if the data
    /// length does not match `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> FilterResult<Self> {
        check_shape(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidParameters(format!(
                "kernel data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Kernel {
            width,
            height,
            data,
        })
    }

    /// Create a box (averaging) kernel of size (2*radius+1) squared.
    ///
    /// Every weight is `1 / (2*radius+1)^2`. Radius 0 yields the 1x1
    /// identity kernel.
    pub fn box_blur(radius: u32) -> Self {
        let size = 2 * radius + 1;
        let n = size as usize * size as usize;
        Kernel {
            width: size,
            height: size,
            data: vec![1.0 / n as f32; n],
        }
    }

    /// Create the fixed 7x7 Gaussian blur kernel.
    pub fn gaussian() -> Self {
        Kernel {
            width: 7,
            height: 7,
            data: GAUSSIAN_7X7.to_vec(),
        }
    }

    /// Create the fixed 3x3 edge-detection kernel (center 8, neighbors -1).
    pub fn edge_detection() -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: EDGE_3X3.to_vec(),
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center offset on the x axis (`width / 2`).
    #[inline]
    pub fn half_width(&self) -> u32 {
        self.width / 2
    }

    /// Get the center offset on the y axis (`height / 2`).
    #[inline]
    pub fn half_height(&self) -> u32 {
        self.height / 2
    }

    /// Get the kernel data in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the weight at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Get the sum of all kernel weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Validate this kernel's shape.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernelShape`] if either dimension is
    /// even or zero.
    pub fn check_shape(&self) -> FilterResult<()> {
        check_shape(self.width, self.height)
    }
}

fn check_shape(width: u32, height: u32) -> FilterResult<()> {
    if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
        return Err(FilterError::InvalidKernelShape { width, height });
    }
    Ok(())
}
