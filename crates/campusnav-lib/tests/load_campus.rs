mod common;

use std::fs;

use campusnav_lib::{resolve_data_path, CampusMap, Error};
use tempfile::TempDir;

use common::{fixture_campus, fixture_path};

#[test]
fn fixture_loads_nodes_and_graph() {
    let map = fixture_campus();

    assert_eq!(map.nodes.len(), 10);
    assert!(map.graph.contains("northEntrance"));
    assert!(map.graph.contains("Bursary"));
    assert!(map.position("Bursary").is_none());
    assert_eq!(map.graph.neighbours("lobby").len(), 4);
}

#[test]
fn edge_order_is_preserved() {
    let map = fixture_campus();
    let targets: Vec<&str> = map
        .graph
        .neighbours("lobby")
        .iter()
        .map(|edge| edge.to.as_str())
        .collect();
    assert_eq!(
        targets,
        vec!["northEntrance", "passage_F1_east", "passage_F1_west", "Office of the VC"]
    );
}

#[test]
fn load_through_resolved_directory() {
    let temp_dir = TempDir::new().expect("create temp dir");
    fs::copy(fixture_path(), temp_dir.path().join("campus.json")).expect("copy fixture");

    let path = resolve_data_path(Some(temp_dir.path())).expect("path resolves");
    let map = CampusMap::load(&path).expect("copied fixture loads");
    assert_eq!(map, fixture_campus());
}

#[test]
fn truncated_document_is_rejected() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"nodes": {"A": {"x": 1"#).expect("write broken file");

    let error = CampusMap::load(&path).expect_err("truncated JSON");
    assert!(matches!(error, Error::Json(_)));
    assert!(format!("{error}").contains("invalid campus map document"));
}

#[test]
fn serialization_round_trips_through_from_json_str() {
    let map = fixture_campus();
    let document = serde_json::to_string(&map).expect("serialize");
    let reparsed = CampusMap::from_json_str(&document).expect("reparse");
    assert_eq!(reparsed, map);
}
