//! Square 2D convolution kernels built from separable filters.

use super::filters::SeparableFilter;
use crate::error::CoreError;
use crate::image::ImageF32;
use nalgebra::{DMatrix, DVector};

/// Odd-sized square kernel stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2D {
    size: usize,
    data: Vec<f32>,
}

impl Kernel2D {
    /// Outer product `t · tᵀ` of the filter taps, rescaled to sum to one.
    /// Zero-sum filters are left unscaled.
    pub fn outer(filter: &dyn SeparableFilter) -> Result<Self, CoreError> {
        let taps = filter.taps();
        let size = taps.len();
        if size == 0 || size % 2 == 0 {
            return Err(CoreError::InvalidKernelSize { size });
        }
        let column = DVector::from_column_slice(taps);
        let mut product: DMatrix<f32> = &column * column.transpose();
        let sum = product.sum();
        if sum.abs() > f32::EPSILON {
            product /= sum;
        }
        // nalgebra storage is column-major; transpose to lay rows out contiguously.
        let data = product.transpose().as_slice().to_vec();
        Ok(Self { size, data })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.size + x]
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Zero-pad the kernel into the top-left corner of a `width × height`
    /// buffer. The spectral product relies on this exact placement; the crop
    /// offset in [`ConvolutionLayout`](super::layout::ConvolutionLayout)
    /// compensates the resulting shift.
    pub fn embed_top_left(&self, width: usize, height: usize) -> Result<ImageF32, CoreError> {
        if self.size > width || self.size > height {
            return Err(CoreError::KernelExceedsWorkingSize {
                kernel: self.size,
                working: (width, height),
            });
        }
        let mut out = ImageF32::new(width, height);
        for (y, row) in self.data.chunks_exact(self.size).enumerate() {
            let start = out.idx(0, y);
            out.data[start..start + self.size].copy_from_slice(row);
        }
        Ok(out)
    }
}
