//! Near-equal integer splitting of a 1D index range.

use crate::error::CoreError;
use serde::Serialize;
use std::ops::Range;

/// Inclusive index range `[start, end]`. `end < start` denotes an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: isize,
    pub end: isize,
}

impl Interval {
    pub fn new(start: isize, end: isize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1)
        }
    }

    /// Half-open column range covered by the interval, clipped at zero.
    /// Empty intervals map to an empty range.
    pub fn columns(&self) -> Range<usize> {
        let lo = self.start.max(0) as usize;
        let hi = self.end.saturating_add(1).max(0) as usize;
        lo..hi.max(lo)
    }
}

/// Split `[start, end]` into `parts` contiguous intervals, left to right.
///
/// Every interval gets `len / parts` indices and the first `len % parts` get
/// one more, so lengths differ by at most one and the union is exactly
/// `[start, end]`. When `parts` exceeds the range length the trailing
/// intervals come out empty (`end == start - 1`) rather than failing.
pub fn split_interval(start: isize, end: isize, parts: usize) -> Result<Vec<Interval>, CoreError> {
    if parts == 0 {
        return Err(CoreError::ZeroParts);
    }
    if end < start {
        return Err(CoreError::InvertedRange { start, end });
    }
    let len = end
        .checked_add(1)
        .and_then(|past_end| past_end.checked_sub(start))
        .ok_or(CoreError::RangeTooLarge { start, end })? as usize;
    let base = len / parts;
    let remainder = len % parts;

    let mut intervals = Vec::with_capacity(parts);
    let mut next = start;
    for i in 0..parts {
        let size = base + usize::from(i < remainder);
        let interval = Interval::new(next, next + size as isize - 1);
        next = interval.end + 1;
        intervals.push(interval);
    }
    Ok(intervals)
}
