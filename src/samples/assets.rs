//! Packaged asset access
//!
//! This module locates and reads the binary sample files shipped with
//! the crate.

pub(crate) mod store;
