//! Frequency-domain image smoothing.
//!
//! Purpose
//! - Blur an image with a separable Gaussian by multiplying spectra rather
//!   than sliding a spatial kernel. Useful as an optional noise-reduction step
//!   in front of the zone statistics.
//!
//! Design
//! - `layout` owns all padding/embedding/crop arithmetic.
//! - `border` replicates edge pixels into the padded working buffer.
//! - `filters` + `kernel` build the normalised 2D kernel (outer product).
//! - `fft` wraps `rustfft` for 2D forward/inverse transforms.
//! - `convolver` chains the stages and converts back to 8 bits.
//!
//! Notes
//! - Working sizes are 5-smooth so `rustfft` stays on its fast paths.
//! - The border margin keeps wrap-around energy out of the cropped output.

pub mod border;
pub mod convolver;
pub mod fft;
pub mod filters;
pub mod kernel;
pub mod layout;

pub use convolver::{
    ConvolutionResult, ConvolutionStage, ConvolverParams, Normalization, SpectralConvolver,
};
pub use filters::{GaussianFilter, SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP};
pub use kernel::Kernel2D;
pub use layout::{optimal_dft_size, ConvolutionLayout, DEFAULT_BORDER_MARGIN};
