//! Vertical zone geometry and per-zone masks.

use super::interval::{split_interval, Interval};
use crate::error::CoreError;
use crate::image::GrayImageU8;
use serde::Serialize;

/// Intensity painted inside a zone mask.
pub const ZONE_MASK_VALUE: u8 = 255;

/// Half-open rectangle `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl ZoneRect {
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// One column band of the image. Recomputed per image, never mutated.
#[derive(Clone, Debug)]
pub struct Zone {
    pub index: usize,
    pub interval: Interval,
    pub rect: ZoneRect,
    /// Source-sized mask: `ZONE_MASK_VALUE` inside `rect`, zero elsewhere.
    pub mask: GrayImageU8,
}

impl Zone {
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.rect.contains(x, y)
    }
}

/// Band geometry only, without allocating masks.
pub fn zone_rects(width: usize, height: usize, parts: usize) -> Result<Vec<ZoneRect>, CoreError> {
    Ok(zone_intervals(width, height, parts)?
        .into_iter()
        .map(|iv| rect_for(iv, height))
        .collect())
}

/// Split the image into `parts` full-height column bands.
///
/// The x-axis is split over `[0, width - 1]`; each band's rectangle runs to
/// `interval.end + 1` exclusive, so every column belongs to exactly one zone.
/// Bands produced from empty intervals have zero width and an all-zero mask.
pub fn partition_zones(width: usize, height: usize, parts: usize) -> Result<Vec<Zone>, CoreError> {
    let intervals = zone_intervals(width, height, parts)?;
    Ok(intervals
        .into_iter()
        .enumerate()
        .map(|(index, interval)| {
            let rect = rect_for(interval, height);
            let mut mask = GrayImageU8::new(width, height);
            mask.fill_rect(
                rect.x,
                rect.y,
                rect.x + rect.width,
                rect.y + rect.height,
                ZONE_MASK_VALUE,
            );
            Zone {
                index,
                interval,
                rect,
                mask,
            }
        })
        .collect())
}

fn zone_intervals(width: usize, height: usize, parts: usize) -> Result<Vec<Interval>, CoreError> {
    if width == 0 || height == 0 {
        return Err(CoreError::EmptyImage { width, height });
    }
    split_interval(0, width as isize - 1, parts)
}

fn rect_for(interval: Interval, height: usize) -> ZoneRect {
    let cols = interval.columns();
    ZoneRect {
        x: cols.start,
        y: 0,
        width: cols.len(),
        height,
    }
}
