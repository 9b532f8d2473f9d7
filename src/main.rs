//! # Wayfind CLI
//!
//! Command-line interface for the wayfind library.
//! Runs shortest-path queries against the built-in sample graph.

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use wayfind::{plan_routes, sample_graph, QueryOptions};

mod cli;

use cli::OutputFormat;

/// Command-line interface for wayfind
#[derive(Parser)]
#[command(name = "wayfind")]
#[command(about = "Shortest paths over a small weighted directed graph")]
#[command(long_about = "Runs Dijkstra's algorithm over the built-in sample graph:
  a -> b:4, d:1    b -> a:3, c:2    c -> b:4, e:5
  d -> a:1, e:1    e -> c:3, d:1

Examples:
  wayfind --from a --to c          # Distance and route from a to c
  wayfind --from a --all           # Every node reachable from a
  wayfind --from a --to c --json   # Same report as JSON")]
#[command(version = env!("WAYFIND_VERSION"))]
struct Cli {
    /// Start node
    #[arg(short, long)]
    from: String,

    /// Finish node
    #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
    to: Option<String>,

    /// Report every node reachable from the start node
    #[arg(short, long)]
    all: bool,

    /// Settle every reachable node instead of stopping at the finish node
    #[arg(long)]
    exhaustive: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = QueryOptions {
        from: cli.from.clone(),
        to: cli.to.clone(),
        exhaustive: cli.exhaustive,
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let reports = plan_routes(&sample_graph(), &options)?;
    println!("{}", cli::render(&reports, format)?);
    Ok(())
}
