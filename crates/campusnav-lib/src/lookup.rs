//! Node lookup by name fragment.

use crate::campus::CampusMap;
use crate::graph::NodeId;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Return every node identifier containing `query` as a case-insensitive
/// substring, sorted.
///
/// The query is matched verbatim, whitespace included; an empty query matches
/// every node.
pub fn search_nodes(map: &CampusMap, query: &str) -> Vec<NodeId> {
    let needle = query.to_lowercase();
    map.node_ids()
        .into_iter()
        .filter(|id| id.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

/// Suggest node identifiers that look like `query`, best match first.
///
/// Used to turn a fruitless search into a "did you mean" hint.
pub fn fuzzy_node_matches(map: &CampusMap, query: &str, limit: usize) -> Vec<NodeId> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = map
        .node_ids()
        .into_iter()
        .map(|id| (strsim::jaro_winkler(&needle, &id.to_lowercase()), id))
        .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, id)| id.to_string())
        .collect()
}
