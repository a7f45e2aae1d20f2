//! Replicated-border padding into the working buffer.

use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Copy `src` into an `out_w × out_h` float buffer with its top-left corner at
/// `(left, top)`. Samples outside the source repeat the nearest edge pixel.
pub fn pad_replicate<I>(src: &I, left: usize, top: usize, out_w: usize, out_h: usize) -> ImageF32
where
    I: ImageView<Pixel = u8>,
{
    let mut out = ImageF32::new(out_w, out_h);
    let (w, h) = (src.width(), src.height());
    if w == 0 || h == 0 {
        return out;
    }
    // Column lookup shared by every row.
    let cols: Vec<usize> = (0..out_w)
        .map(|x| x.saturating_sub(left).min(w - 1))
        .collect();
    for y in 0..out_h {
        let sy = y.saturating_sub(top).min(h - 1);
        let src_row = src.row(sy);
        let dst_row = out.row_mut(y);
        for (dst, &sx) in dst_row.iter_mut().zip(&cols) {
            *dst = src_row[sx] as f32;
        }
    }
    out
}
