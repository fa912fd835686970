//! Sample asset codecs
//!
//! One submodule per on-disk format: self-describing `.npy` for the
//! grayscale samples, a zlib stream for the packed color sample.

pub(crate) mod deflate;
pub(crate) mod npy;
