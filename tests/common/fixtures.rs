use std::io::Write;
use std::sync::Arc;

use image::{ImageBuffer, Rgb};
use solarmap::core::Geography;
use solarmap::{Catalog, Coordinate, Dashboard, ProjectRecord};
use tempfile::NamedTempFile;

/// Creates a 100x100 red test image and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Creates a ProjectRecord with test data
pub fn make_project(
    id: &str,
    state_code: &str,
    capacity_mw: f64,
    latitude: f64,
    longitude: f64,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        name: format!("{} Solar", id.to_uppercase()),
        location: format!("Somewhere, {state_code}"),
        state_code: state_code.to_string(),
        capacity_mw,
        coordinates: Coordinate::new(latitude, longitude),
        image_url: format!("images/{id}.jpg"),
    }
}

/// Three projects: two inside fixture regions, one in a state the topology lacks.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        make_project("alpha", "California", 50.0, 36.0, -120.0),
        make_project("beta", "Nevada", 75.0, 38.0, -116.5),
        make_project("gamma", "Atlantis", 120.0, 35.0, -100.0),
    ])
    .expect("Sample catalog should be valid")
}

pub fn sample_dashboard() -> Dashboard {
    Dashboard::new(Arc::new(sample_catalog()))
}

/// Quantized topology with four states:
/// - California and Nevada as simple squares
/// - Oregon as a MultiPolygon using a reversed arc
/// - Puerto Rico, which no inset of the projection covers
pub const TOPOLOGY_JSON: &str = r#"{
  "type": "Topology",
  "transform": { "scale": [0.01, 0.01], "translate": [-125, 30] },
  "objects": {
    "states": {
      "type": "GeometryCollection",
      "geometries": [
        { "type": "Polygon", "arcs": [[0]], "id": "06", "properties": { "name": "California" } },
        { "type": "Polygon", "arcs": [[1]], "id": "32", "properties": { "name": "Nevada" } },
        { "type": "MultiPolygon", "arcs": [[[-3]]], "id": "41", "properties": { "name": "Oregon" } },
        { "type": "Polygon", "arcs": [[3]], "id": "72", "properties": { "name": "Puerto Rico" } },
        { "type": "Point", "coordinates": [0, 0] }
      ]
    }
  },
  "arcs": [
    [[300, 400], [400, 0], [0, 400], [-400, 0], [0, -400]],
    [[700, 600], [300, 0], [0, 400], [-300, 0], [0, -400]],
    [[200, 1200], [600, 0], [0, 300], [-600, 0], [0, -300]],
    [[5800, -1210], [150, 0], [0, 60], [-150, 0], [0, -60]]
  ]
}"#;

pub fn sample_geography() -> Geography {
    Geography::from_topology(TOPOLOGY_JSON.as_bytes(), "states")
        .expect("Fixture topology should decode")
}

/// Writes the fixture topology to a temp file for file-source loading.
pub fn create_topology_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp topology file");
    file.write_all(TOPOLOGY_JSON.as_bytes())
        .expect("Failed to write topology");
    file
}
