use std::path::Path;

use ndarray::Array3;
use tracing::{info, instrument};

use crate::samples::assets::store;
use crate::samples::codec::{deflate, npy};
use crate::samples::common::error::{Result, SampleError};
use crate::samples::gray::rgb_to_grayscale;
use crate::samples::types::{
    AERO_SHAPE, ASCENT_SHAPE, FACE_CHANNELS, FACE_HEIGHT, FACE_WIDTH, GrayPixels, RgbPixels,
};

const ASCENT_ASSET: &str = "ascent.npy";
const AERO_ASSET: &str = "aero.npy";
const FACE_ASSET: &str = "face.dat";

/// Loads the 512 x 512 "ascent" grayscale sample.
///
/// Every call reads the bundled asset fresh and returns an owned buffer
/// with 8-bit samples spanning the full 0..=255 range.
///
/// # Returns
///
/// * `Ok(GrayPixels)` - a (512, 512) u8 array
/// * `Err(SampleError)` - the asset is missing or does not decode
///
/// # Examples
///
/// ```no_run
/// let ascent = sample_images::load_ascent_image().unwrap();
/// assert_eq!(ascent.dim(), (512, 512));
/// assert_eq!(ascent.iter().copied().max(), Some(255));
/// ```
#[instrument]
pub fn load_ascent_image() -> Result<GrayPixels> {
    load_gray_sample(&store::asset_path(ASCENT_ASSET), ASCENT_SHAPE)
}

/// Loads the 512 x 512 "aero" grayscale sample. Same contract as
/// [`load_ascent_image`], backed by its own asset file.
#[instrument]
pub fn load_aero_image() -> Result<GrayPixels> {
    load_gray_sample(&store::asset_path(AERO_ASSET), AERO_SHAPE)
}

/// Loads the 768 x 1024 color sample as a (768, 1024, 3) u8 array with
/// channels in R, G, B order.
#[instrument]
pub fn load_face_image() -> Result<RgbPixels> {
    load_color_sample(&store::asset_path(FACE_ASSET))
}

/// Loads the color sample and collapses it to a (768, 1024) luminance
/// image via [`rgb_to_grayscale`].
#[instrument]
pub fn load_face_image_grayscale() -> Result<GrayPixels> {
    let rgb = load_color_sample(&store::asset_path(FACE_ASSET))?;
    Ok(rgb_to_grayscale(&rgb))
}

pub(crate) fn load_gray_sample(path: &Path, expected: (usize, usize)) -> Result<GrayPixels> {
    let pixels = npy::read_gray_sample(path, expected)?;
    info!(
        rows = pixels.nrows(),
        cols = pixels.ncols(),
        "Loaded grayscale sample"
    );
    Ok(pixels)
}

pub(crate) fn load_color_sample(path: &Path) -> Result<RgbPixels> {
    let compressed = store::read_asset(path)?;
    let raw = deflate::decompress(path, &compressed)?;

    let expected = FACE_HEIGHT * FACE_WIDTH * FACE_CHANNELS;
    if raw.len() != expected {
        return Err(SampleError::SizeMismatch {
            expected,
            actual: raw.len(),
        });
    }

    // Length is checked above, so the reshape cannot fail.
    let pixels = Array3::from_shape_vec((FACE_HEIGHT, FACE_WIDTH, FACE_CHANNELS), raw)
        .map_err(|e| SampleError::Decode(format!("{}: {}", path.display(), e)))?;

    info!(
        rows = FACE_HEIGHT,
        cols = FACE_WIDTH,
        "Loaded color sample"
    );
    Ok(pixels)
}
