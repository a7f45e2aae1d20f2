//! Size arithmetic for frequency-domain convolution.
//!
//! Every offset used by padding, kernel embedding and cropping is derived
//! here. The padded image places the source at `(margin, margin)` inside a
//! `working` buffer whose dimensions are FFT-friendly. The kernel is embedded
//! at the top-left corner, which makes the circular product lag the centred
//! convolution by the kernel radius; the crop origin adds that radius back.
//!
//! With `margin >= radius` on every side, no output sample inside the crop
//! reads across the wrap-around seam of the circular convolution.

use crate::error::CoreError;
use serde::Serialize;

/// Extra replicated border added around the image before transforming.
pub const DEFAULT_BORDER_MARGIN: usize = 25;

/// Smallest `m >= n` whose only prime factors are 2, 3 and 5.
pub fn optimal_dft_size(n: usize) -> usize {
    let mut m = n.max(1);
    while !is_five_smooth(m) {
        m += 1;
    }
    m
}

fn is_five_smooth(mut n: usize) -> bool {
    for p in [2, 3, 5] {
        while n % p == 0 {
            n /= p;
        }
    }
    n == 1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolutionLayout {
    /// Source size `(width, height)`.
    pub original: (usize, usize),
    /// Padded transform size `(width, height)`.
    pub working: (usize, usize),
    pub kernel_size: usize,
    /// Replicated border on the left and top edges.
    pub margin: usize,
    pub pad_right: usize,
    pub pad_bottom: usize,
}

impl ConvolutionLayout {
    /// Plan a convolution of a `width × height` image with a square odd
    /// kernel. The effective margin is at least the kernel radius.
    pub fn new(
        width: usize,
        height: usize,
        kernel_size: usize,
        border_margin: usize,
    ) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyImage { width, height });
        }
        if kernel_size == 0 || kernel_size % 2 == 0 {
            return Err(CoreError::InvalidKernelSize { size: kernel_size });
        }
        let margin = border_margin.max(kernel_size / 2);
        let working_w = optimal_dft_size(width + 2 * margin);
        let working_h = optimal_dft_size(height + 2 * margin);
        Ok(Self {
            original: (width, height),
            working: (working_w, working_h),
            kernel_size,
            margin,
            pad_right: working_w - width - margin,
            pad_bottom: working_h - height - margin,
        })
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.kernel_size / 2
    }

    /// Top-left corner, in working coordinates, of the region holding the
    /// centred convolution of the source image.
    #[inline]
    pub fn crop_origin(&self) -> (usize, usize) {
        let o = self.margin + self.radius();
        (o, o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_sizes_are_five_smooth_and_minimal() {
        assert_eq!(optimal_dft_size(0), 1);
        assert_eq!(optimal_dft_size(1), 1);
        assert_eq!(optimal_dft_size(7), 8);
        assert_eq!(optimal_dft_size(17), 18);
        assert_eq!(optimal_dft_size(130), 135);
        assert_eq!(optimal_dft_size(150), 150);
        assert_eq!(optimal_dft_size(1021), 1024);
        for n in 1..300 {
            let m = optimal_dft_size(n);
            assert!(m >= n && is_five_smooth(m));
            assert!((n..m).all(|k| !is_five_smooth(k)));
        }
    }

    fn assert_no_wraparound(layout: &ConvolutionLayout) {
        let (w, h) = layout.original;
        let (ww, wh) = layout.working;
        let r = layout.radius();
        let (cx, cy) = layout.crop_origin();
        assert_eq!(layout.margin + w + layout.pad_right, ww);
        assert_eq!(layout.margin + h + layout.pad_bottom, wh);
        // Output sample n reads padded samples n - k + 1 ..= n.
        assert!(cx + 1 >= layout.kernel_size);
        assert!(cy + 1 >= layout.kernel_size);
        assert!(cx + w <= ww && cy + h <= wh);
        assert!(layout.pad_right >= r && layout.pad_bottom >= r);
        assert!(ww >= layout.kernel_size && wh >= layout.kernel_size);
    }

    #[test]
    fn kernel_much_smaller_than_image() {
        let layout = ConvolutionLayout::new(100, 80, 3, DEFAULT_BORDER_MARGIN).unwrap();
        assert_eq!(layout.margin, 25);
        assert_eq!(layout.working, (150, 135));
        assert_eq!(layout.crop_origin(), (26, 26));
        assert_no_wraparound(&layout);
    }

    #[test]
    fn kernel_equal_to_image() {
        let layout = ConvolutionLayout::new(9, 9, 9, 0).unwrap();
        assert_eq!(layout.margin, 4);
        assert_eq!(layout.working, (18, 18));
        assert_eq!(layout.crop_origin(), (8, 8));
        assert_no_wraparound(&layout);
    }

    #[test]
    fn kernel_larger_than_image() {
        let layout = ConvolutionLayout::new(5, 3, 15, 2).unwrap();
        assert_eq!(layout.margin, 7);
        assert_eq!(layout.working, (20, 18));
        assert_no_wraparound(&layout);
    }

    #[test]
    fn layouts_never_wrap_for_any_size() {
        for w in 1..24 {
            for h in [1, 2, 7, 13] {
                for k in [1, 3, 5, 11, 31] {
                    for margin in [0, 3, DEFAULT_BORDER_MARGIN] {
                        let layout = ConvolutionLayout::new(w, h, k, margin).unwrap();
                        assert_no_wraparound(&layout);
                    }
                }
            }
        }
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        assert!(matches!(
            ConvolutionLayout::new(0, 4, 3, 25),
            Err(CoreError::EmptyImage { .. })
        ));
        assert_eq!(
            ConvolutionLayout::new(4, 4, 4, 25),
            Err(CoreError::InvalidKernelSize { size: 4 })
        );
        assert_eq!(
            ConvolutionLayout::new(4, 4, 0, 25),
            Err(CoreError::InvalidKernelSize { size: 0 })
        );
    }
}
