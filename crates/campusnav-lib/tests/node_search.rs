mod common;

use campusnav_lib::{fuzzy_node_matches, search_nodes};

use common::fixture_campus;

#[test]
fn query_matches_case_insensitively() {
    let map = fixture_campus();
    assert_eq!(search_nodes(&map, "off"), vec!["Office of the VC"]);
    assert_eq!(search_nodes(&map, "OFFICE"), vec!["Office of the VC"]);
}

#[test]
fn query_returns_every_match_sorted() {
    let map = fixture_campus();
    assert_eq!(
        search_nodes(&map, "passage"),
        vec!["passage_F1_east", "passage_F1_west"]
    );
}

#[test]
fn nodes_only_in_graph_are_found() {
    let map = fixture_campus();
    assert_eq!(search_nodes(&map, "burs"), vec!["Bursary"]);
}

#[test]
fn no_match_returns_empty_list() {
    let map = fixture_campus();
    assert!(search_nodes(&map, "cafeteria").is_empty());
}

#[test]
fn empty_query_lists_every_node() {
    let map = fixture_campus();
    let all = search_nodes(&map, "");
    assert_eq!(all.len(), map.node_ids().len());
    assert!(all.iter().any(|id| id == "Bursary"));
}

#[test]
fn trailing_space_is_part_of_the_query() {
    let map = fixture_campus();
    assert!(search_nodes(&map, "library ").is_empty());
}

#[test]
fn typo_yields_suggestions() {
    let map = fixture_campus();
    assert!(search_nodes(&map, "librray").is_empty());

    let suggestions = fuzzy_node_matches(&map, "librray", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("library"));
}

#[test]
fn unrelated_query_has_no_suggestions() {
    let map = fixture_campus();
    assert!(fuzzy_node_matches(&map, "zzzzzzzzzzzzzzz", 3).is_empty());
}
