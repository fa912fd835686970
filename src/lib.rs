//! Bundled sample images for demos and tests.
//!
//! Three small images ship with this crate as binary data files: two
//! 512 x 512 grayscale samples ("ascent" and "aero") and one
//! 768 x 1024 color sample ("face"). Each loader reads its asset fresh on
//! every call and hands back an owned `ndarray` buffer.
//!
//! ```no_run
//! use sample_images::{load_ascent_image, load_face_image};
//!
//! let ascent = load_ascent_image().unwrap();
//! assert_eq!(ascent.dim(), (512, 512));
//!
//! let face = load_face_image().unwrap();
//! assert_eq!(face.dim(), (768, 1024, 3));
//! ```

pub mod logger;
pub mod samples;

pub use samples::{
    GrayPixels, Result, RgbPixels, SampleError, load_aero_image, load_ascent_image,
    load_face_image, load_face_image_grayscale, rgb_to_grayscale,
};
