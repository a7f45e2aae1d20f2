//! 2D discrete Fourier transform on top of `rustfft`.
//!
//! Rows are transformed in place, then columns via a transpose round-trip.
//! The forward transform is unscaled; [`Spectrum::inverse_real`] divides by
//! `width * height`.

use crate::error::CoreError;
use crate::image::ImageF32;
use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

/// Complex spectrum of a `w × h` real image, row-major.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub w: usize,
    pub h: usize,
    pub data: Vec<Complex<f32>>,
}

impl Spectrum {
    /// Forward transform of a real image (imaginary plane zero).
    pub fn forward(planner: &mut FftPlanner<f32>, image: &ImageF32) -> Self {
        let (w, h) = (image.w, image.h);
        let mut data: Vec<Complex<f32>> = (0..h)
            .flat_map(move |y| {
                let start = image.idx(0, y);
                image.data[start..start + w].iter().map(|&v| Complex::new(v, 0.0))
            })
            .collect();
        transform_2d(planner, &mut data, w, h, FftDirection::Forward);
        Self { w, h, data }
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Complex<f32> {
        self.data[y * self.w + x]
    }

    /// Element-wise complex product, the transform-domain form of circular
    /// convolution. Both spectra must come from equally sized buffers.
    pub fn mul_spectrums(&mut self, other: &Spectrum) -> Result<(), CoreError> {
        if self.dims() != other.dims() {
            return Err(CoreError::SpectrumMismatch {
                image: self.dims(),
                kernel: other.dims(),
            });
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a *= *b;
        }
        Ok(())
    }

    /// Inverse transform, scaled by `1 / (w * h)`, keeping the real plane.
    pub fn inverse_real(mut self, planner: &mut FftPlanner<f32>) -> ImageF32 {
        let (w, h) = (self.w, self.h);
        transform_2d(planner, &mut self.data, w, h, FftDirection::Inverse);
        let scale = 1.0 / (w * h) as f32;
        let mut out = ImageF32::new(w, h);
        for (dst, c) in out.data.iter_mut().zip(&self.data) {
            *dst = c.re * scale;
        }
        out
    }
}

fn transform_2d(
    planner: &mut FftPlanner<f32>,
    data: &mut [Complex<f32>],
    w: usize,
    h: usize,
    direction: FftDirection,
) {
    if w == 0 || h == 0 {
        return;
    }
    // `process` runs one transform per `w`-sized chunk, i.e. per row.
    planner.plan_fft(w, direction).process(data);

    let mut columns = transpose(data, w, h);
    planner.plan_fft(h, direction).process(&mut columns);
    let rows = transpose(&columns, h, w);
    data.copy_from_slice(&rows);
}

/// Transpose a row-major `w × h` buffer into a row-major `h × w` buffer.
fn transpose(src: &[Complex<f32>], w: usize, h: usize) -> Vec<Complex<f32>> {
    let mut out = vec![Complex::new(0.0, 0.0); w * h];
    for y in 0..h {
        for x in 0..w {
            out[x * h + y] = src[y * w + x];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from(w: usize, h: usize, f: impl Fn(usize, usize) -> f32) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, f(x, y));
            }
        }
        img
    }

    #[test]
    fn dc_term_is_the_sample_sum() {
        let img = image_from(6, 4, |x, y| (x + 2 * y) as f32);
        let mut planner = FftPlanner::new();
        let spectrum = Spectrum::forward(&mut planner, &img);
        let sum: f32 = img.data.iter().sum();
        assert!((spectrum.get(0, 0).re - sum).abs() < 1e-3);
        assert!(spectrum.get(0, 0).im.abs() < 1e-3);
    }

    #[test]
    fn inverse_restores_the_image() {
        let img = image_from(10, 9, |x, y| ((x * 7 + y * 3) % 11) as f32);
        let mut planner = FftPlanner::new();
        let back = Spectrum::forward(&mut planner, &img).inverse_real(&mut planner);
        for (a, b) in img.data.iter().zip(&back.data) {
            assert!((a - b).abs() < 1e-3, "{a} vs {b}");
        }
    }

    #[test]
    fn product_with_shifted_delta_is_circular_shift() {
        let img = image_from(8, 5, |x, y| (x * 10 + y) as f32);
        let mut delta = ImageF32::new(8, 5);
        delta.set(1, 2, 1.0);
        let mut planner = FftPlanner::new();
        let mut spectrum = Spectrum::forward(&mut planner, &img);
        spectrum.mul_spectrums(&Spectrum::forward(&mut planner, &delta))
            .unwrap();
        let out = spectrum.inverse_real(&mut planner);
        for y in 0..5 {
            for x in 0..8 {
                let expected = img.get((x + 8 - 1) % 8, (y + 5 - 2) % 5);
                assert!((out.get(x, y) - expected).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn mismatched_spectra_are_an_invariant_violation() {
        let mut planner = FftPlanner::new();
        let mut a = Spectrum::forward(&mut planner, &ImageF32::new(4, 4));
        let b = Spectrum::forward(&mut planner, &ImageF32::new(4, 5));
        let err = a.mul_spectrums(&b).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvariantViolation);
    }
}
