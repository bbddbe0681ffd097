#![allow(dead_code)]

use image::GrayImage;
use img2segy::geometry::{CoordinateReferenceSystem, Geometry, Point2};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Grayscale images of `1..=max_w` columns and `2..=max_h` rows with
/// arbitrary pixel values.
pub fn arb_gray_image(max_w: u32, max_h: u32) -> BoxedStrategy<GrayImage> {
    (1..=max_w, 2..=max_h)
        .prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u8>(), (w * h) as usize).prop_map(move |pixels| {
                GrayImage::from_raw(w, h, pixels).expect("buffer matches dimensions")
            })
        })
        .boxed()
}

/// A map coordinate within the range of a UTM easting/northing.
pub fn arb_coord() -> BoxedStrategy<f64> {
    (-1.0e7..1.0e7f64).boxed()
}

/// Geometries with a shallow, strictly increasing depth range, so sample
/// intervals stay within the 16-bit header field for small images.
pub fn arb_geometry() -> BoxedStrategy<Geometry> {
    (arb_coord(), arb_coord(), arb_coord(), arb_coord(), 0.0..10.0f64, 0.001..5.0f64)
        .prop_map(|(lx, ly, rx, ry, top, thickness)| {
            Geometry::new(
                Point2::new(lx, ly),
                Point2::new(rx, ry),
                top,
                top + thickness,
                CoordinateReferenceSystem {
                    map_projection: "UTM".to_string(),
                    zone_id: "32".to_string(),
                    horizontal_units: "m".to_string(),
                    vertical_units: "m".to_string(),
                },
            )
        })
        .boxed()
}
