//! Sample image types and fixed contracts

use ndarray::{Array2, Array3};

/// Single-channel sample image, indexed `[row, column]`.
pub type GrayPixels = Array2<u8>;

/// Color sample image, indexed `[row, column, channel]` with channels in
/// R, G, B order.
pub type RgbPixels = Array3<u8>;

pub const ASCENT_SHAPE: (usize, usize) = (512, 512);
pub const AERO_SHAPE: (usize, usize) = (512, 512);

pub const FACE_HEIGHT: usize = 768;
pub const FACE_WIDTH: usize = 1024;
pub const FACE_CHANNELS: usize = 3;

/// Weights applied to the R, G and B channels when collapsing the color
/// sample to a single luminance channel.
pub const LUMA_WEIGHTS: [f64; 3] = [0.21, 0.71, 0.07];
