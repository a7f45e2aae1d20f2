//! Gaussian smoothing through explicit frequency-domain convolution.
//!
//! One call walks the stages in [`ConvolutionStage`] order and keeps no state
//! afterwards:
//!
//! 1. `Prepare`: replicate-pad the gray image into the working buffer.
//! 2. `TransformImage`: forward FFT of the padded image.
//! 3. `BuildKernel`: separable kernel outer product, embedded top-left.
//! 4. `TransformKernel`: forward FFT of the embedded kernel.
//! 5. `Multiply`: complex element-wise product.
//! 6. `InverseTransform`: inverse FFT, real plane.
//! 7. `NormalizeCrop`: crop the centred footprint, map back to 8 bits.

use super::border::pad_replicate;
use super::fft::Spectrum;
use super::filters::{GaussianFilter, SeparableFilter};
use super::kernel::Kernel2D;
use super::layout::{ConvolutionLayout, DEFAULT_BORDER_MARGIN};
use crate::diagnostics::TimingBreakdown;
use crate::error::CoreError;
use crate::image::{ColorImageU8, GrayImageU8, ImageF32, ImageU8, ImageView, ImageViewMut};
use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvolutionStage {
    Prepare,
    TransformImage,
    BuildKernel,
    TransformKernel,
    Multiply,
    InverseTransform,
    NormalizeCrop,
}

impl ConvolutionStage {
    pub fn label(&self) -> &'static str {
        match self {
            ConvolutionStage::Prepare => "prepare",
            ConvolutionStage::TransformImage => "transform_image",
            ConvolutionStage::BuildKernel => "build_kernel",
            ConvolutionStage::TransformKernel => "transform_kernel",
            ConvolutionStage::Multiply => "multiply",
            ConvolutionStage::InverseTransform => "inverse_transform",
            ConvolutionStage::NormalizeCrop => "normalize_crop",
        }
    }
}

/// How the real plane is mapped back to 8-bit samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Normalization {
    /// Round and clamp to `0..=255`. Preserves absolute levels.
    #[default]
    Clamp,
    /// Stretch the cropped plane's `[min, max]` onto `0..=255`. A flat plane
    /// falls back to `Clamp`.
    MinMax,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvolverParams {
    /// Odd kernel size in pixels.
    pub kernel_size: usize,
    /// Gaussian sigma; `None` derives it from `kernel_size`.
    pub sigma: Option<f64>,
    /// Replicated border added on every side before transforming.
    pub border_margin: usize,
    pub normalization: Normalization,
}

impl Default for ConvolverParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: None,
            border_margin: DEFAULT_BORDER_MARGIN,
            normalization: Normalization::Clamp,
        }
    }
}

/// Output of one convolution call.
#[derive(Clone, Debug)]
pub struct ConvolutionResult {
    pub image: GrayImageU8,
    pub layout: ConvolutionLayout,
    pub timing: TimingBreakdown,
}

#[derive(Clone, Debug, Default)]
pub struct SpectralConvolver {
    params: ConvolverParams,
}

impl SpectralConvolver {
    pub fn new(params: ConvolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConvolverParams {
        &self.params
    }

    /// Gaussian-blur a single-channel image.
    pub fn convolve_gray(&self, src: ImageU8<'_>) -> Result<GrayImageU8, CoreError> {
        self.run(src).map(|r| r.image)
    }

    /// Convert to gray first, then blur. Output is single-channel.
    pub fn convolve_luma(&self, src: &ColorImageU8) -> Result<GrayImageU8, CoreError> {
        let gray = src.to_gray();
        self.convolve_gray(gray.as_view())
    }

    /// Blur each channel independently and interleave the results again.
    pub fn convolve_channels(&self, src: &ColorImageU8) -> Result<ColorImageU8, CoreError> {
        let planes = src.split_channels();
        #[cfg(feature = "parallel")]
        let blurred: Result<Vec<GrayImageU8>, CoreError> = planes
            .par_iter()
            .map(|plane| self.convolve_gray(plane.as_view()))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let blurred: Result<Vec<GrayImageU8>, CoreError> = planes
            .iter()
            .map(|plane| self.convolve_gray(plane.as_view()))
            .collect();
        ColorImageU8::merge_channels(&blurred?)
    }

    /// Gaussian convolution with full layout and timing details.
    pub fn run(&self, src: ImageU8<'_>) -> Result<ConvolutionResult, CoreError> {
        let filter = GaussianFilter::new(self.params.kernel_size, self.params.sigma)?;
        self.run_with_filter(src, &filter)
    }

    /// Convolve with the outer product of an arbitrary odd-length separable
    /// filter.
    pub fn run_with_filter(
        &self,
        src: ImageU8<'_>,
        filter: &dyn SeparableFilter,
    ) -> Result<ConvolutionResult, CoreError> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        src.validate()?;

        let stage = ConvolutionStage::Prepare;
        let layout = ConvolutionLayout::new(
            src.w,
            src.h,
            filter.taps().len(),
            self.params.border_margin,
        )?;
        let (work_w, work_h) = layout.working;
        let padded = pad_replicate(&src, layout.margin, layout.margin, work_w, work_h);
        trace!(
            "{}: {}x{} -> {}x{} (margin {})",
            stage.label(),
            src.w,
            src.h,
            work_w,
            work_h,
            layout.margin
        );
        let mut t = timing.lap(stage.label(), total_start);

        let mut planner = FftPlanner::new();
        let stage = ConvolutionStage::TransformImage;
        let mut spectrum = Spectrum::forward(&mut planner, &padded);
        trace!("{}: done", stage.label());
        t = timing.lap(stage.label(), t);

        let stage = ConvolutionStage::BuildKernel;
        let kernel = Kernel2D::outer(filter)?;
        let embedded = kernel.embed_top_left(work_w, work_h)?;
        trace!("{}: {}x{} kernel", stage.label(), kernel.size(), kernel.size());
        t = timing.lap(stage.label(), t);

        let stage = ConvolutionStage::TransformKernel;
        let kernel_spectrum = Spectrum::forward(&mut planner, &embedded);
        trace!("{}: done", stage.label());
        t = timing.lap(stage.label(), t);

        let stage = ConvolutionStage::Multiply;
        spectrum.mul_spectrums(&kernel_spectrum)?;
        trace!("{}: done", stage.label());
        t = timing.lap(stage.label(), t);

        let stage = ConvolutionStage::InverseTransform;
        let real = spectrum.inverse_real(&mut planner);
        trace!("{}: done", stage.label());
        t = timing.lap(stage.label(), t);

        let stage = ConvolutionStage::NormalizeCrop;
        let image = normalize_crop(&real, &layout, self.params.normalization);
        trace!("{}: {}x{}", stage.label(), image.width(), image.height());
        timing.lap(stage.label(), t);

        timing.total_ms = crate::diagnostics::elapsed_ms(total_start);
        debug!(
            "SpectralConvolver::run {}x{} kernel={} in {:.3} ms",
            src.w,
            src.h,
            kernel.size(),
            timing.total_ms
        );
        Ok(ConvolutionResult {
            image,
            layout,
            timing,
        })
    }
}

/// Cut the original footprint out of the real plane and map it to 8 bits.
fn normalize_crop(
    real: &ImageF32,
    layout: &ConvolutionLayout,
    normalization: Normalization,
) -> GrayImageU8 {
    let (w, h) = layout.original;
    let (cx, cy) = layout.crop_origin();
    let cropped = real.crop(cx, cy, w, h);

    let map: Box<dyn Fn(f32) -> f32> = match (normalization, cropped.min_max()) {
        (Normalization::MinMax, Some((lo, hi))) if hi - lo > 1e-6 => {
            let scale = 255.0 / (hi - lo);
            Box::new(move |v| (v - lo) * scale)
        }
        _ => Box::new(|v| v),
    };

    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        for (dst, &v) in out.row_mut(y).iter_mut().zip(cropped.row(y)) {
            *dst = map(v).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
