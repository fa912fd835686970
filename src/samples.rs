//! Bundled sample image loading.
//!
//! This module groups everything around the packaged demonstration
//! images: asset location, the per-format codecs, grayscale conversion
//! and the public loader operations.

pub(crate) mod assets;
pub(crate) mod codec;
pub mod common;
pub mod gray;
pub mod loaders;
pub mod types;

#[cfg(test)]
mod tests;

pub use common::{Result, SampleError};
pub use gray::rgb_to_grayscale;
pub use loaders::{
    load_aero_image, load_ascent_image, load_face_image, load_face_image_grayscale,
};
pub use types::{GrayPixels, RgbPixels};
