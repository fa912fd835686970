use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Sample asset not found: {0}")]
    AssetMissing(String),

    #[error("Failed to decode sample asset: {0}")]
    Decode(String),

    #[error("Failed to decompress sample asset: {0}")]
    Decompress(String),

    #[error("Decoded sample payload is {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Sample has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SampleError>;
