//! Angle utilities for headings, in degrees.
//!
//! Convention: 0° points up (north), positive angles turn clockwise towards
//! the right edge of the image (east), negative ones towards the left (west).

/// Wraps an angle into the range (-180°, 180°].
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Evenly spaced position `index` of `count` on the arc `[start, end]`,
/// endpoints included. A single position sits at the arc midpoint.
#[inline]
pub fn arc_position(start: f64, end: f64, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.5 * (start + end);
    }
    start + (end - start) * index as f64 / (count - 1) as f64
}

/// Unit vector in image coordinates (x right, y down) for a heading.
#[inline]
pub fn heading_to_vector(angle_deg: f64) -> [f64; 2] {
    let rad = angle_deg.to_radians();
    [rad.sin(), -rad.cos()]
}
