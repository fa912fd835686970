use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::samples::common::error::{Result, SampleError};

/// Directory holding the packaged sample files, resolved against the
/// crate manifest so the assets travel inside the published package.
pub(crate) fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub(crate) fn asset_path(name: &str) -> PathBuf {
    data_dir().join(name)
}

/// Opens a packaged asset for reading. The handle closes when it drops,
/// on error paths included.
pub(crate) fn open_asset(path: &Path) -> Result<File> {
    debug!("Opening sample asset {}", path.display());
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SampleError::AssetMissing(format!("{}: {}", path.display(), e))
        } else {
            SampleError::Io(e)
        }
    })
}

/// Reads a packaged asset fully into memory.
pub(crate) fn read_asset(path: &Path) -> Result<Vec<u8>> {
    let mut file = open_asset(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
