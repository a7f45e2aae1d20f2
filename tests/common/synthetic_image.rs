#![allow(dead_code)]

/// Generates a crude hand silhouette: a palm rectangle with a raised finger
/// whose column is `finger_x`. Foreground is 255, background 0.
pub fn hand_mask_u8(width: usize, height: usize, palm: (usize, usize), finger_x: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(palm.0 < palm.1 && palm.1 <= width, "palm span must fit the image");

    let mut img = vec![0u8; width * height];
    let palm_top = height / 2;
    let finger_half = (width / 40).max(1);
    for y in 0..height {
        for x in 0..width {
            let in_palm = y >= palm_top && x >= palm.0 && x < palm.1;
            let in_finger = y >= height / 8
                && y < palm_top
                && x + finger_half >= finger_x
                && x < finger_x + finger_half;
            if in_palm || in_finger {
                img[y * width + x] = 255;
            }
        }
    }
    img
}

/// Uniform image with every sample set to `value`.
pub fn flat_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Deterministic pseudo-random texture (xorshift), for smoothing tests.
pub fn noise_u8(width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
