mod common;

use campusnav_lib::{find_path, find_path_with_edges, CampusMap, Edge, Graph, NodePosition, Zero};
use serde_json::json;

use common::{cheapest_walk, fixture_campus, oracle_distances};

fn all_ids(map: &CampusMap) -> Vec<String> {
    map.node_ids().into_iter().map(str::to_string).collect()
}

#[test]
fn path_to_self_is_single_node() {
    let map = fixture_campus();
    for id in all_ids(&map) {
        assert_eq!(map.find_path(&id, &id), Some(vec![id.clone()]), "node {id}");
    }
}

#[test]
fn shortest_route_prefers_cheaper_detour() {
    let map = fixture_campus();
    let path = map
        .find_path("northEntrance", "Office of the VC")
        .expect("route exists");

    assert_eq!(
        path,
        vec![
            "northEntrance",
            "lobby",
            "passage_F1_east",
            "stairs_east",
            "Office of the VC"
        ]
    );
}

#[test]
fn edge_variant_passes_through_attributes() {
    let map = fixture_campus();
    let edges = map
        .find_path_with_edges("northEntrance", "passage_F1_east")
        .expect("route exists");

    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].to, "lobby");
    assert_eq!(
        edges[1].attributes.get("path"),
        Some(&json!([{ "dir": "east", "distance": 10 }]))
    );
}

#[test]
fn reachable_paths_are_valid_and_optimal() {
    let map = fixture_campus();
    let ids = all_ids(&map);

    for start in &ids {
        let oracle = oracle_distances(&map, start);
        for goal in &ids {
            let path = map.find_path(start, goal);
            match oracle.get(goal) {
                None => assert_eq!(path, None, "{start} -> {goal} should be unreachable"),
                Some(&best) => {
                    let path = path.unwrap_or_else(|| panic!("{start} -> {goal} should exist"));
                    assert_eq!(path.first(), Some(start));
                    assert_eq!(path.last(), Some(goal));
                    let cost = cheapest_walk(&map.graph, &path)
                        .unwrap_or_else(|| panic!("{start} -> {goal} uses a missing edge"));
                    assert!(
                        (cost - best).abs() < 1e-9,
                        "{start} -> {goal}: cost {cost}, optimum {best}"
                    );
                }
            }
        }
    }
}

#[test]
fn both_variants_agree_on_node_sequence() {
    let map = fixture_campus();
    let ids = all_ids(&map);

    for start in &ids {
        for goal in &ids {
            let nodes = map.find_path(start, goal);
            let edges = map.find_path_with_edges(start, goal);
            assert_eq!(nodes.is_some(), edges.is_some(), "{start} -> {goal}");

            if let (Some(nodes), Some(edges)) = (nodes, edges) {
                let implied: Vec<String> = std::iter::once(start.clone())
                    .chain(edges.into_iter().map(|edge| edge.to))
                    .collect();
                assert_eq!(implied, nodes, "{start} -> {goal}");
            }
        }
    }
}

#[test]
fn directed_edges_are_not_reversible() {
    let map = fixture_campus();
    assert!(map.find_path("stairs_east", "Office of the VC").is_some());
    assert_eq!(map.find_path("Office of the VC", "stairs_east"), None);
    assert_eq!(map.find_path_with_edges("Office of the VC", "stairs_east"), None);
}

#[test]
fn absent_start_or_goal_has_no_path() {
    let map = fixture_campus();
    assert_eq!(map.find_path("Basement", "lobby"), None);
    assert_eq!(map.find_path("lobby", "Basement"), None);
    assert_eq!(map.find_path_with_edges("Basement", "lobby"), None);
}

#[test]
fn isolated_node_with_coordinates_is_unreachable() {
    let map = fixture_campus();
    assert_eq!(map.find_path("northEntrance", "Security Post"), None);
}

#[test]
fn nodes_without_coordinates_are_still_routed() {
    let map = fixture_campus();
    let path = map.find_path("library", "Bursary").expect("route exists");
    assert_eq!(path, vec!["library", "Bursary"]);
}

#[test]
fn parallel_edges_report_first_listed_record() {
    let map = fixture_campus();
    let edges = map
        .find_path_with_edges("SN211", "library")
        .expect("route exists");

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].attributes.get("route"), Some(&json!("stairs")));
    assert_eq!(edges[0].weight, 20.0);
}

#[test]
fn documented_three_node_example() {
    let graph = Graph::from_iter([
        ("A".to_string(), vec![Edge::new("B", 1.0)]),
        ("B".to_string(), vec![Edge::new("C", 2.0)]),
        ("C".to_string(), vec![]),
    ]);
    let map = CampusMap::new(
        [
            ("A".to_string(), NodePosition { x: 0.0, y: 0.0 }),
            ("B".to_string(), NodePosition { x: 1.0, y: 0.0 }),
            ("C".to_string(), NodePosition { x: 2.0, y: 0.0 }),
        ]
        .into_iter()
        .collect(),
        graph,
    );

    assert_eq!(map.find_path("A", "C"), Some(vec!["A".into(), "B".into(), "C".into()]));
    assert_eq!(
        map.find_path_with_edges("A", "C"),
        Some(vec![Edge::new("B", 1.0), Edge::new("C", 2.0)])
    );
}

#[test]
fn stale_queue_entries_do_not_corrupt_result() {
    // B is first reached through the expensive direct edge and later improved
    // through D, leaving an outdated queue entry behind.
    let graph = Graph::from_iter([
        (
            "A".to_string(),
            vec![Edge::new("B", 10.0), Edge::new("D", 1.0)],
        ),
        ("D".to_string(), vec![Edge::new("B", 1.0)]),
        ("B".to_string(), vec![Edge::new("C", 1.0)]),
    ]);

    let path = find_path(&graph, &Zero, "A", "C").expect("route exists");
    assert_eq!(path, vec!["A", "D", "B", "C"]);

    let edges = find_path_with_edges(&graph, &Zero, "A", "C").expect("route exists");
    let total: f64 = edges.iter().map(|edge| edge.weight).sum();
    assert_eq!(total, 3.0);
}

#[test]
fn cycles_terminate() {
    let graph = Graph::from_iter([
        ("A".to_string(), vec![Edge::new("B", 1.0)]),
        ("B".to_string(), vec![Edge::new("A", 1.0)]),
    ]);
    assert_eq!(find_path(&graph, &Zero, "A", "Z"), None);
}
