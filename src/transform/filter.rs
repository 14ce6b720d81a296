//! Colour-vision deficiency simulation filter.

use crate::types::{Deficiency, Rgb};

/// Apply a deficiency simulation matrix to every pixel in a sequence.
///
/// Each channel of the matrix product is truncated toward zero (not rounded)
/// and left unclamped, so a matrix row summing above one can push a channel
/// outside the 0-255 display range. Narrowing to displayable bytes happens
/// at encode time.
///
/// The output has the same length and order as the input, channels in
/// R, G, B order.
pub fn apply_filter(pixels: &[Rgb], deficiency: Deficiency) -> Vec<[i32; 3]> {
    let matrix = deficiency.matrix();

    pixels
        .iter()
        .map(|p| {
            let [r, g, b] = matrix.transform([p.r as f64, p.g as f64, p.b as f64]);
            [r as i32, g as i32, b as i32]
        })
        .collect()
}
