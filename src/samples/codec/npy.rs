//! Grayscale sample decoding.
//!
//! The fixed grayscale samples ship as NumPy `.npy` version 1.0 files, a
//! self-describing format that carries dtype, storage order and shape
//! ahead of the raw payload. Decoding is delegated to `ndarray-npy`; this
//! module only maps its failures into [`SampleError`] and checks the
//! decoded dimensions against the fixed contract.

use std::io::BufReader;
use std::path::Path;

use ndarray_npy::ReadNpyExt;
use tracing::debug;

use crate::samples::assets::store;
use crate::samples::common::error::{Result, SampleError};
use crate::samples::types::GrayPixels;

/// Reads a `.npy` grayscale sample and validates its dimensions.
///
/// A file that decodes to anything other than a u8 matrix of the
/// `expected` dimensions is a packaging defect and is rejected rather
/// than returned.
pub(crate) fn read_gray_sample(path: &Path, expected: (usize, usize)) -> Result<GrayPixels> {
    let file = store::open_asset(path)?;
    let pixels = GrayPixels::read_npy(BufReader::new(file))
        .map_err(|e| SampleError::Decode(format!("{}: {}", path.display(), e)))?;

    debug!(
        "Decoded {}x{} grayscale sample from {}",
        pixels.nrows(),
        pixels.ncols(),
        path.display()
    );

    if pixels.dim() != expected {
        return Err(SampleError::ShapeMismatch {
            expected,
            actual: pixels.dim(),
        });
    }
    Ok(pixels)
}
