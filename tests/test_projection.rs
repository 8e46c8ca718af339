//! Integration tests for the composite US projection.

mod common;

use common::*;
use geo::{Area, Coord, LineString, Polygon, coord};
use solarmap::core::projection::ConicEqualArea;

const DIMENSIONS: Dimensions = Dimensions {
    width: 960.0,
    height: 600.0,
};

fn projection() -> AlbersUsa {
    AlbersUsa::for_dimensions(DIMENSIONS).expect("Projection should build")
}

#[test]
fn test_center_maps_to_middle() {
    let point = projection()
        .project(coord! { x: -96.6, y: 38.7 })
        .expect("center should project");
    assert!((point.x - 480.0).abs() < 1e-6, "x = {}", point.x);
    assert!((point.y - 300.0).abs() < 1e-6, "y = {}", point.y);
}

#[test]
fn test_outside_every_inset() {
    assert!(projection().project(coord! { x: 0.0, y: 0.0 }).is_none());
    // Puerto Rico
    assert!(projection().project(coord! { x: -66.1, y: 18.4 }).is_none());
    assert!(projection().project(coord! { x: f64::NAN, y: 40.0 }).is_none());
}

#[test]
fn test_north_is_up_and_east_is_right() {
    let projection = projection();
    let denver = projection.project(coord! { x: -104.99, y: 39.74 }).expect("Denver");
    let new_york = projection.project(coord! { x: -74.0, y: 40.71 }).expect("New York");
    let houston = projection.project(coord! { x: -95.37, y: 29.76 }).expect("Houston");

    assert!(new_york.x > denver.x);
    assert!(houston.y > denver.y);
}

#[test]
fn test_hawaii_inset() {
    let k = DIMENSIONS.width * 1.3;
    let honolulu: Coord<f64> = projection()
        .project(coord! { x: -157.86, y: 21.31 })
        .expect("Honolulu should land in the Hawaii inset");

    assert!(honolulu.x > 480.0 - 0.214 * k && honolulu.x < 480.0 - 0.115 * k);
    assert!(honolulu.y > 300.0 + 0.166 * k && honolulu.y < 300.0 + 0.234 * k);
}

#[test]
fn test_alaska_inset() {
    let k = DIMENSIONS.width * 1.3;
    let anchorage = projection()
        .project(coord! { x: -149.9, y: 61.22 })
        .expect("Anchorage should land in the Alaska inset");

    assert!(anchorage.x > 480.0 - 0.425 * k && anchorage.x < 480.0 - 0.214 * k);
    assert!(anchorage.y > 300.0 + 0.120 * k && anchorage.y < 300.0 + 0.234 * k);
}

#[test]
fn test_lower48_conic_preserves_area() -> anyhow::Result<()> {
    let conic = ConicEqualArea::new((29.5, 45.5), -96.0, coord! { x: -96.6, y: 38.7 })?;

    // One-degree cells far apart in latitude keep their true area on the unit sphere
    for (lon, lat) in [(-100.0_f64, 30.0_f64), (-80.0, 45.0), (-120.0, 48.0)] {
        let corners = [(lon, lat), (lon + 1.0, lat), (lon + 1.0, lat + 1.0), (lon, lat + 1.0)];
        let mut ring = Vec::with_capacity(corners.len());
        for (x, y) in corners {
            ring.push(conic.project(coord! { x: x, y: y })?);
        }
        let projected = Polygon::new(LineString::from(ring), Vec::new()).unsigned_area();
        let band = (lat + 1.0).to_radians().sin() - lat.to_radians().sin();
        let expected = 1.0_f64.to_radians() * band;
        let error = (projected - expected).abs() / expected;
        assert!(error < 1e-3, "cell at ({lon}, {lat}) off by {error}");
    }
    Ok(())
}

#[test]
fn test_scale_follows_width() {
    let small = AlbersUsa::for_dimensions(Dimensions::from_container_width(500.0))
        .expect("Projection should build");
    let large = AlbersUsa::for_dimensions(Dimensions::from_container_width(1000.0))
        .expect("Projection should build");
    let seattle = coord! { x: -122.33, y: 47.61 };

    let a = small.project(seattle).expect("Seattle");
    let b = large.project(seattle).expect("Seattle");
    let small_center = Dimensions::from_container_width(500.0).center();
    let large_center = Dimensions::from_container_width(1000.0).center();

    // Offsets from the center double with the width
    assert!(((b.x - large_center.0) - 2.0 * (a.x - small_center.0)).abs() < 1e-6);
    assert!(((b.y - large_center.1) - 2.0 * (a.y - small_center.1)).abs() < 1e-6);
}

#[test]
fn test_dimensions_from_width() {
    let wide = Dimensions::from_container_width(1000.0);
    assert_eq!(wide.width, 1000.0);
    assert_eq!(wide.height, 600.0);

    let narrow = Dimensions::from_container_width(500.0);
    assert_eq!(narrow.height, 325.0);

    assert_eq!(Dimensions::default(), DIMENSIONS);
}
