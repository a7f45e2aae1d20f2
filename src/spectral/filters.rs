//! Separable 1D filters whose outer product forms the 2D convolution kernel.

use crate::error::CoreError;

/// Trait implemented by separable 1D filters used for kernel construction.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Pass-through filter.
pub const IDENTITY_1TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[1.0]);
/// Normalised 3-tap Gaussian filter `[1, 2, 1] / 4`.
pub const GAUSSIAN_3TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[0.25, 0.5, 0.25]);
/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);
/// Normalised 7-tap Gaussian filter `[1, 3.5, 7, 9, 7, 3.5, 1] / 32`.
pub const GAUSSIAN_7TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[
    0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
]);

/// Sigma picked for a kernel of `size` taps when none is given.
#[inline]
pub fn default_sigma(size: usize) -> f64 {
    0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Sampled, normalised Gaussian of odd length.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianFilter {
    taps: Vec<f32>,
    sigma: f64,
}

impl GaussianFilter {
    /// Build a `size`-tap Gaussian.
    ///
    /// `None` or a non-positive sigma derives one from the size; sizes up to 7
    /// then use the fixed small kernels above.
    pub fn new(size: usize, sigma: Option<f64>) -> Result<Self, CoreError> {
        if size == 0 || size % 2 == 0 {
            return Err(CoreError::InvalidKernelSize { size });
        }
        let requested = sigma.unwrap_or(0.0);
        if !requested.is_finite() {
            return Err(CoreError::InvalidSigma { sigma: requested });
        }
        if requested <= 0.0 {
            let sigma = default_sigma(size);
            let fixed = match size {
                1 => Some(IDENTITY_1TAP),
                3 => Some(GAUSSIAN_3TAP),
                5 => Some(GAUSSIAN_5TAP),
                7 => Some(GAUSSIAN_7TAP),
                _ => None,
            };
            if let Some(filter) = fixed {
                return Ok(Self {
                    taps: filter.taps().to_vec(),
                    sigma,
                });
            }
            return Ok(Self::sampled(size, sigma));
        }
        Ok(Self::sampled(size, requested))
    }

    fn sampled(size: usize, sigma: f64) -> Self {
        let centre = (size / 2) as f64;
        let scale = -0.5 / (sigma * sigma);
        let raw: Vec<f64> = (0..size)
            .map(|i| {
                let d = i as f64 - centre;
                (scale * d * d).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();
        Self {
            taps: raw.iter().map(|v| (v / sum) as f32).collect(),
            sigma,
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn size(&self) -> usize {
        self.taps.len()
    }
}

impl SeparableFilter for GaussianFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}
