use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use ndarray::{Array2, Array3};
use ndarray_npy::WriteNpyExt;
use tempfile::tempdir;

use crate::samples::common::error::SampleError;
use crate::samples::gray::rgb_to_grayscale;
use crate::samples::loaders::{
    load_aero_image, load_ascent_image, load_color_sample, load_face_image,
    load_face_image_grayscale, load_gray_sample,
};
use crate::samples::types::{ASCENT_SHAPE, FACE_CHANNELS, FACE_HEIGHT, FACE_WIDTH};

#[test]
fn ascent_has_documented_shape_and_range() {
    crate::logger::init();

    let ascent = load_ascent_image().unwrap();
    assert_eq!(ascent.dim(), (512, 512));
    assert_eq!(ascent.iter().copied().max(), Some(255));
}

#[test]
fn aero_has_documented_shape_and_range() {
    let aero = load_aero_image().unwrap();
    assert_eq!(aero.dim(), (512, 512));
    assert_eq!(aero.iter().copied().max(), Some(255));
}

#[test]
fn face_has_documented_shape_and_range() {
    let face = load_face_image().unwrap();
    assert_eq!(face.dim(), (768, 1024, 3));
    assert_eq!(face.iter().copied().max(), Some(255));
}

#[test]
fn face_grayscale_has_documented_shape() {
    let gray = load_face_image_grayscale().unwrap();
    assert_eq!(gray.dim(), (768, 1024));
}

#[test]
fn face_grayscale_matches_weighted_sum() {
    let rgb = load_face_image().unwrap();
    let gray = load_face_image_grayscale().unwrap();

    for (row, col) in [(0usize, 0usize), (10, 10), (384, 512), (767, 1023)] {
        let expected = (0.21 * rgb[[row, col, 0]] as f64
            + 0.71 * rgb[[row, col, 1]] as f64
            + 0.07 * rgb[[row, col, 2]] as f64) as u8;
        assert_eq!(gray[[row, col]], expected, "pixel ({row}, {col})");
    }
}

#[test]
fn grayscale_conversion_truncates_toward_zero() {
    let mut rgb = Array3::<u8>::zeros((1, 3, 3));
    // 0.21*100 + 0.71*200 + 0.07*50 = 166.5
    rgb[[0, 0, 0]] = 100;
    rgb[[0, 0, 1]] = 200;
    rgb[[0, 0, 2]] = 50;
    // The weights sum to 0.99, so saturated white lands below 255.
    rgb[[0, 1, 0]] = 255;
    rgb[[0, 1, 1]] = 255;
    rgb[[0, 1, 2]] = 255;

    let gray = rgb_to_grayscale(&rgb);
    assert_eq!(gray.dim(), (1, 3));
    assert_eq!(gray[[0, 0]], 166);
    assert_eq!(gray[[0, 1]], 252);
    assert_eq!(gray[[0, 2]], 0);
}

#[test]
fn repeated_loads_return_independent_copies() {
    let mut first = load_ascent_image().unwrap();
    let second = load_ascent_image().unwrap();
    assert_eq!(first, second);

    first[[0, 0]] = first[[0, 0]].wrapping_add(1);
    assert_ne!(first[[0, 0]], second[[0, 0]]);
}

#[test]
fn missing_gray_asset_is_reported() {
    let dir = tempdir().unwrap();
    let result = load_gray_sample(&dir.path().join("nope.npy"), ASCENT_SHAPE);
    assert!(matches!(result.unwrap_err(), SampleError::AssetMissing(_)));
}

#[test]
fn missing_color_asset_is_reported() {
    let dir = tempdir().unwrap();
    let result = load_color_sample(&dir.path().join("nope.dat"));
    assert!(matches!(result.unwrap_err(), SampleError::AssetMissing(_)));
}

#[test]
fn corrupt_gray_asset_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.npy");
    std::fs::write(&path, b"definitely not an npy header").unwrap();

    let result = load_gray_sample(&path, ASCENT_SHAPE);
    assert!(matches!(result.unwrap_err(), SampleError::Decode(_)));
}

#[test]
fn wrong_dimension_gray_asset_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tiny.npy");
    let file = std::fs::File::create(&path).unwrap();
    Array2::<u8>::zeros((4, 4)).write_npy(file).unwrap();

    let result = load_gray_sample(&path, ASCENT_SHAPE);
    assert!(matches!(
        result.unwrap_err(),
        SampleError::ShapeMismatch {
            expected: (512, 512),
            actual: (4, 4),
        }
    ));
}

#[test]
fn corrupt_color_asset_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.dat");
    std::fs::write(&path, b"definitely not a zlib stream").unwrap();

    let result = load_color_sample(&path);
    assert!(matches!(result.unwrap_err(), SampleError::Decompress(_)));
}

#[test]
fn short_color_payload_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.dat");

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&vec![7u8; 1000]).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let expected = FACE_HEIGHT * FACE_WIDTH * FACE_CHANNELS;
    let result = load_color_sample(&path);
    match result.unwrap_err() {
        SampleError::SizeMismatch {
            expected: e,
            actual,
        } => {
            assert_eq!(e, expected);
            assert_eq!(actual, 1000);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
