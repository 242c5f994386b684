use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::info::handle_info_command;
use campusnav_cli::commands::route::{
    handle_edges_command, handle_route_command, RouteCommandArgs,
};
use campusnav_cli::commands::search::handle_search_command;
use campusnav_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus map lookup and pathfinding")]
struct Cli {
    /// Campus map JSON file, or a directory containing campus.json.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RouteArgs {
    /// Starting node name.
    #[arg(long = "from")]
    from: String,
    /// Destination node name.
    #[arg(long = "to")]
    to: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Search without the straight-line distance estimate.
    #[arg(long)]
    no_heuristic: bool,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            format: args.format,
            no_heuristic: args.no_heuristic,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two nodes.
    Route(RouteArgs),
    /// List the edge records along the shortest route.
    Edges(RouteArgs),
    /// Find nodes whose name contains the query (case-insensitive).
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Summarise the loaded campus map.
    Info {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data = cli.data.as_deref();

    match cli.command {
        Command::Route(args) => handle_route_command(data, &args.into()),
        Command::Edges(args) => handle_edges_command(data, &args.into()),
        Command::Search { query, format } => handle_search_command(data, &query, format),
        Command::Info { format } => handle_info_command(data, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
