//! Fixed-weight luminance conversion.

use ndarray::Array2;

use crate::samples::types::{GrayPixels, LUMA_WEIGHTS, RgbPixels};

/// Collapses a color sample to a single luminance channel.
///
/// Each output pixel is `0.21*r + 0.71*g + 0.07*b`, accumulated in f64
/// and truncated to u8, so the result reproduces bit for bit across
/// platforms. Note the weights sum to 0.99, so pure white maps to 252.
pub fn rgb_to_grayscale(rgb: &RgbPixels) -> GrayPixels {
    let (height, width, _) = rgb.dim();
    let [wr, wg, wb] = LUMA_WEIGHTS;
    Array2::from_shape_fn((height, width), |(row, col)| {
        let luma = wr * rgb[[row, col, 0]] as f64
            + wg * rgb[[row, col, 1]] as f64
            + wb * rgb[[row, col, 2]] as f64;
        luma as u8
    })
}
