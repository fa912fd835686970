//! Decompression for the packed color sample.

use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;
use tracing::debug;

use crate::samples::common::error::{Result, SampleError};

/// Inflates a zlib stream fully into memory.
pub(crate) fn decompress(path: &Path, compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|e| SampleError::Decompress(format!("{}: {}", path.display(), e)))?;

    debug!(
        "Inflated {} compressed bytes into {} from {}",
        compressed.len(),
        raw.len(),
        path.display()
    );
    Ok(raw)
}
