//! Route and edge-listing command handlers.

use std::io;
use std::path::Path;

use anyhow::Result;

use campusnav_lib::{plan_route, HeuristicKind, RoutePlan, RouteRequest};

use crate::commands::load_campus;
use crate::output::{write_edges, write_json, write_route, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments shared by the `route` and `edges` commands.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    pub format: OutputFormat,
    /// Search without the straight-line estimate.
    pub no_heuristic: bool,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        let heuristic = if self.no_heuristic {
            HeuristicKind::Zero
        } else {
            HeuristicKind::Euclidean
        };
        RouteRequest::new(self.from.as_str(), self.to.as_str()).with_heuristic(heuristic)
    }
}

fn plan(data: Option<&Path>, args: &RouteCommandArgs) -> Result<RoutePlan> {
    let (_, campus) = load_campus(data)?;
    let plan = plan_route(&campus, &args.to_request())?;
    Ok(plan)
}

/// Handle the `route` subcommand: print the visited nodes.
pub fn handle_route_command(data: Option<&Path>, args: &RouteCommandArgs) -> Result<()> {
    let plan = plan(data, args)?;
    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => write_route(&mut stdout, &plan, &ColorPalette::detect())?,
        OutputFormat::Json => write_json(&mut stdout, &plan)?,
    }
    Ok(())
}

/// Handle the `edges` subcommand: print the traversed edge records.
pub fn handle_edges_command(data: Option<&Path>, args: &RouteCommandArgs) -> Result<()> {
    let plan = plan(data, args)?;
    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => write_edges(&mut stdout, &plan.edges, &ColorPalette::detect())?,
        OutputFormat::Json => write_json(&mut stdout, &plan.edges)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_heuristic_selects_zero_estimate() {
        let args = RouteCommandArgs {
            from: "lobby".to_string(),
            to: "library".to_string(),
            format: OutputFormat::Text,
            no_heuristic: true,
        };
        let request = args.to_request();
        assert_eq!(request.heuristic, HeuristicKind::Zero);
        assert_eq!(request.goal, "library");
    }
}
