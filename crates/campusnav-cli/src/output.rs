//! Output formatting for routes, edge lists and node searches.
//!
//! Renderers write to any `io::Write` so the binary can target stdout while
//! tests capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{Edge, RoutePlan};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Summary of a loaded campus map for the `info` command.
#[derive(Debug, Clone, Serialize)]
pub struct CampusInfo {
    pub source: String,
    pub nodes: usize,
    pub positioned_nodes: usize,
    pub edges: usize,
}

/// Render `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Render a route with STRT/STEP/GOAL tags and per-hop weights.
pub fn write_route<W: Write>(
    out: &mut W,
    plan: &RoutePlan,
    palette: &ColorPalette,
) -> io::Result<()> {
    let p = palette;
    writeln!(
        out,
        "Route from {}{}{} to {}{}{}:",
        p.white_bold, plan.start, p.reset, p.white_bold, plan.goal, p.reset
    )?;

    writeln!(out, "  {} STRT {} {}", p.tag_start, p.reset, plan.start)?;
    let last = plan.edges.len().saturating_sub(1);
    for (index, edge) in plan.edges.iter().enumerate() {
        let tag = if index == last {
            (p.tag_goal, "GOAL")
        } else {
            (p.tag_step, "STEP")
        };
        writeln!(
            out,
            "  {} {} {} {} {}+{}{}",
            tag.0, tag.1, p.reset, edge.to, p.green, edge.weight, p.reset
        )?;
    }

    writeln!(
        out,
        "{}{} hops, total weight {}{}",
        p.gray,
        plan.hop_count(),
        plan.total_weight,
        p.reset
    )
}

/// Render edge records one per line, extra attributes as compact JSON.
pub fn write_edges<W: Write>(
    out: &mut W,
    edges: &[Edge],
    palette: &ColorPalette,
) -> io::Result<()> {
    if edges.is_empty() {
        return writeln!(out, "Already at destination.");
    }

    for (index, edge) in edges.iter().enumerate() {
        write!(
            out,
            "{:>3}. {} {}(weight {}){}",
            index + 1,
            edge.to,
            palette.green,
            edge.weight,
            palette.reset
        )?;
        for (key, value) in &edge.attributes {
            write!(out, " {}{}={}{}", palette.gray, key, value, palette.reset)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render matching node names, one per line.
pub fn write_nodes<W: Write>(out: &mut W, nodes: &[String]) -> io::Result<()> {
    for node in nodes {
        writeln!(out, "{}", node)?;
    }
    Ok(())
}

pub fn write_info<W: Write>(out: &mut W, info: &CampusInfo) -> io::Result<()> {
    writeln!(out, "Campus map: {}", info.source)?;
    writeln!(
        out,
        "Nodes: {} ({} with coordinates)",
        info.nodes, info.positioned_nodes
    )?;
    writeln!(out, "Edges: {}", info.edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan() -> RoutePlan {
        let map = campusnav_lib::CampusMap::from_json_str(
            r#"{
                "nodes": {},
                "graph": {
                    "A": [{ "to": "B", "weight": 1 }],
                    "B": [{ "to": "C", "weight": 2.5, "path": "north" }]
                }
            }"#,
        )
        .unwrap();
        campusnav_lib::plan_route(&map, &campusnav_lib::RouteRequest::new("A", "C")).unwrap()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn route_text_tags_start_and_goal() {
        let plan = plan();
        let text = render(|out| write_route(out, &plan, &ColorPalette::plain()));

        assert!(text.starts_with("Route from A to C:"));
        assert!(text.contains("STRT  A"));
        assert!(text.contains("STEP  B +1"));
        assert!(text.contains("GOAL  C +2.5"));
        assert!(text.contains("2 hops, total weight 3.5"));
    }

    #[test]
    fn edges_text_shows_attributes() {
        let plan = plan();
        let text = render(|out| write_edges(out, &plan.edges, &ColorPalette::plain()));

        assert!(text.contains("  1. B (weight 1)"));
        assert!(text.contains("  2. C (weight 2.5) path=\"north\""));
    }

    #[test]
    fn edges_text_for_empty_route() {
        let text = render(|out| write_edges(out, &[], &ColorPalette::plain()));
        assert_eq!(text, "Already at destination.\n");
    }

    #[test]
    fn json_output_is_pretty_and_terminated() {
        let text = render(|out| write_json(out, &json!({ "nodes": ["lobby"] })));
        assert!(text.contains("\n  \"nodes\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn info_lists_counts() {
        let info = CampusInfo {
            source: "campus.json".to_string(),
            nodes: 11,
            positioned_nodes: 10,
            edges: 24,
        };
        let text = render(|out| write_info(out, &info));
        assert!(text.contains("Nodes: 11 (10 with coordinates)"));
        assert!(text.contains("Edges: 24"));
    }
}
