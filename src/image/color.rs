//! Owned interleaved multi-channel 8-bit image.
//!
//! Channel order is whatever the producer used; `to_gray` assumes RGB(A), which
//! is what `image::io::load_color_image` yields.
use super::u8::GrayImageU8;
use crate::error::CoreError;

/// ITU-R BT.601 luma weights for R, G, B.
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImageU8 {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl ColorImageU8 {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels],
        }
    }

    /// Wrap interleaved bytes; `data.len()` must equal `width * height * channels`.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, CoreError> {
        if channels == 0 {
            return Err(CoreError::ChannelMismatch {
                expected: 1,
                found: 0,
            });
        }
        let required = width * height * channels;
        if data.len() != required {
            return Err(CoreError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[(y * self.width + x) * self.channels + c]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, v: u8) {
        self.data[(y * self.width + x) * self.channels + c] = v;
    }

    /// De-interleave into one owned plane per channel.
    pub fn split_channels(&self) -> Vec<GrayImageU8> {
        (0..self.channels)
            .map(|c| {
                let plane: Vec<u8> = self
                    .data
                    .iter()
                    .skip(c)
                    .step_by(self.channels)
                    .copied()
                    .collect();
                GrayImageU8::from_parts(self.width, self.height, plane)
            })
            .collect()
    }

    /// Interleave equally sized planes back into a color image.
    pub fn merge_channels(planes: &[GrayImageU8]) -> Result<Self, CoreError> {
        let first = planes.first().ok_or(CoreError::ChannelMismatch {
            expected: 1,
            found: 0,
        })?;
        let (width, height) = (first.width(), first.height());
        for plane in planes {
            if plane.width() != width || plane.height() != height {
                return Err(CoreError::ShapeMismatch {
                    what: "channel plane",
                    expected: (width, height),
                    found: (plane.width(), plane.height()),
                });
            }
        }
        let channels = planes.len();
        let mut out = Self::new(width, height, channels);
        for (c, plane) in planes.iter().enumerate() {
            for (i, &v) in plane.data().iter().enumerate() {
                out.data[i * channels + c] = v;
            }
        }
        Ok(out)
    }

    /// Single-channel luma. One-channel images are copied as-is; two-channel
    /// images are treated as gray + alpha.
    pub fn to_gray(&self) -> GrayImageU8 {
        let gray: Vec<u8> = self
            .data
            .chunks_exact(self.channels)
            .map(|px| match px.len() {
                1 | 2 => px[0],
                _ => {
                    let luma = LUMA_WEIGHTS
                        .iter()
                        .zip(px)
                        .map(|(w, &v)| w * v as f32)
                        .sum::<f32>();
                    luma.round().clamp(0.0, 255.0) as u8
                }
            })
            .collect();
        GrayImageU8::from_parts(self.width, self.height, gray)
    }
}

impl From<GrayImageU8> for ColorImageU8 {
    fn from(gray: GrayImageU8) -> Self {
        let (width, height) = (gray.width(), gray.height());
        Self {
            width,
            height,
            channels: 1,
            data: gray.into_raw(),
        }
    }
}
