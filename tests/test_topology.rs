//! Integration tests for TopoJSON decoding and topology sources.

mod common;

use common::*;
use geo::Coord;

#[test]
fn test_decode_regions() {
    let geography = sample_geography();

    // The Point geometry is skipped
    assert_eq!(geography.len(), 4);
    let names: Vec<&str> = geography.names().collect();
    assert_eq!(names, vec!["California", "Nevada", "Oregon", "Puerto Rico"]);
}

#[test]
fn test_quantized_arcs_are_delta_decoded() {
    let geography = sample_geography();
    let california = geography.region("California").expect("California should exist");
    let ring: Vec<Coord<f64>> = california.shape.0[0].exterior().0.clone();

    let expected = [(-122.0, 34.0), (-118.0, 34.0), (-118.0, 38.0), (-122.0, 38.0), (-122.0, 34.0)];
    assert_eq!(ring.len(), expected.len());
    for (actual, (x, y)) in ring.iter().zip(expected) {
        assert!((actual.x - x).abs() < 1e-9, "x {} != {x}", actual.x);
        assert!((actual.y - y).abs() < 1e-9, "y {} != {y}", actual.y);
    }
}

#[test]
fn test_reversed_arc() {
    let geography = sample_geography();
    let oregon = geography.region("Oregon").expect("Oregon should exist");
    let ring = &oregon.shape.0[0].exterior().0;

    // Arc 2 walked backwards: its last point comes second
    assert!((ring[1].x + 123.0).abs() < 1e-9);
    assert!((ring[1].y - 45.0).abs() < 1e-9);
}

#[test]
fn test_missing_object() {
    let result = Geography::from_topology(TOPOLOGY_JSON.as_bytes(), "counties");
    assert!(matches!(result, Err(GeographyError::MissingObject(name)) if name == "counties"));
}

#[test]
fn test_arc_out_of_range() {
    let json = r#"{
        "type": "Topology",
        "objects": {
            "states": { "type": "Polygon", "arcs": [[5]], "properties": { "name": "Nowhere" } }
        },
        "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
    }"#;
    let result = Geography::from_topology(json.as_bytes(), "states");
    assert!(matches!(result, Err(GeographyError::ArcOutOfRange { index: 5, count: 1 })));
}

#[test]
fn test_malformed_topology() {
    let result = Geography::from_topology(b"not json", "states");
    assert!(matches!(result, Err(GeographyError::Decode(_))));
}

#[test]
fn test_parse_source() {
    assert!(matches!(
        TopologySource::parse("https://example.com/states.json"),
        TopologySource::Remote(_)
    ));
    assert!(matches!(TopologySource::parse("data/states.json"), TopologySource::File(_)));
    assert!(matches!(TopologySource::default(), TopologySource::Remote(_)));
}

#[tokio::test]
async fn test_load_from_file() -> anyhow::Result<()> {
    let file = create_topology_file();
    let geography = TopologySource::File(file.path().to_path_buf()).load().await?;

    assert_eq!(geography.len(), 4);
    assert!(geography.region("Nevada").is_some());

    Ok(())
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let result = TopologySource::File(dir.path().join("missing.json")).load().await;
    assert!(matches!(result, Err(GeographyError::Io(_))));
}
