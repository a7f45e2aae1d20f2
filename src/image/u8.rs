use super::traits::{count_foreground, ImageView, ImageViewMut};
use crate::error::CoreError;

/// Borrowed single-channel 8-bit view. Masks enter the pipeline through this.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Check that the view is non-empty and that `data` covers every row.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.w == 0 || self.h == 0 {
            return Err(CoreError::EmptyImage {
                width: self.w,
                height: self.h,
            });
        }
        if self.stride < self.w {
            return Err(CoreError::InvalidStride {
                width: self.w,
                stride: self.stride,
            });
        }
        let required = (self.h - 1) * self.stride + self.w;
        if self.data.len() < required {
            return Err(CoreError::BufferTooSmall {
                required,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Number of samples strictly greater than zero.
    pub fn count_foreground(&self) -> usize {
        count_foreground(self)
    }

    /// Copy the view into an owned, tightly packed buffer.
    pub fn to_owned_image(&self) -> GrayImageU8 {
        let mut out = GrayImageU8::new(self.w, self.h);
        for y in 0..self.h {
            out.row_mut(y).copy_from_slice(self.row(y));
        }
        out
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Owned 8-bit grayscale buffer (`stride == width`).
///
/// Zone masks and convolution results are handed out as values of this type so
/// callers can mutate or drop them without touching the source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Zero-initialized buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap raw row-major bytes; `data.len()` must equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CoreError> {
        let required = width * height;
        if data.len() != required {
            return Err(CoreError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Internal constructor for buffers whose length is correct by construction.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    /// Paint the half-open rectangle `[x0, x1) × [y0, y1)` with `value`.
    /// Coordinates are clamped to the image extents.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, value: u8) {
        let (x1, y1) = (x1.min(self.width), y1.min(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for y in y0..y1 {
            self.row_mut(y)[x0..x1].fill(value);
        }
    }

    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0).count()
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_view_ignores_padding_bytes() {
        // 3×2 image with one padding byte per row, padding set to 255.
        let data = [0u8, 7, 0, 255, 9, 0, 1, 255];
        let view = ImageU8 {
            w: 3,
            h: 2,
            stride: 4,
            data: &data,
        };
        assert!(view.validate().is_ok());
        assert_eq!(view.count_foreground(), 3);
        assert_eq!(view.as_slice(), None);
        let owned = view.to_owned_image();
        assert_eq!(owned.data(), &[0, 7, 0, 9, 0, 1]);
    }

    #[test]
    fn validate_rejects_short_buffers_and_bad_stride() {
        let data = [0u8; 5];
        let short = ImageU8 {
            w: 3,
            h: 2,
            stride: 3,
            data: &data,
        };
        assert!(matches!(
            short.validate(),
            Err(CoreError::BufferTooSmall { required: 6, actual: 5 })
        ));
        let bad_stride = ImageU8 {
            w: 3,
            h: 1,
            stride: 2,
            data: &data,
        };
        assert!(matches!(
            bad_stride.validate(),
            Err(CoreError::InvalidStride { .. })
        ));
        let empty = ImageU8 {
            w: 0,
            h: 4,
            stride: 0,
            data: &data,
        };
        assert!(matches!(empty.validate(), Err(CoreError::EmptyImage { .. })));
    }

    #[test]
    fn fill_rect_clamps_to_extents() {
        let mut img = GrayImageU8::new(4, 3);
        img.fill_rect(2, 1, 10, 10, 255);
        assert_eq!(img.count_foreground(), 4);
        assert_eq!(img.get(1, 1), 0);
        assert_eq!(img.get(3, 2), 255);
        img.fill_rect(3, 0, 3, 3, 9);
        assert_eq!(img.count_foreground(), 4);
        img.fill(0);
        assert_eq!(img.count_foreground(), 0);
    }
}
