use anyhow::Result;
use clap::Parser;
use railgraph::{reader, report};
use store::RouteGraph;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Finds the longest simple path through a railway route network.
///
/// Reads `origin, destination, distance` records from standard input
/// until end of input, then prints the maximum-distance path that
/// visits no station twice. No flags or subcommands; input size is
/// expected to be small enough for exhaustive search.
#[derive(Parser)]
#[command(name = "railgraph", version)]
struct Cli {}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let _cli = Cli::parse();

    info!("reading route data from stdin");
    let mut graph = RouteGraph::new();
    reader::load_routes(std::io::stdin().lock(), &mut graph)?;

    let stats = graph.stats();
    info!(
        "built graph: {} stations, {} routes, cyclic: {}",
        stats.station_count, stats.route_count, stats.is_cyclic
    );

    let best = store::find_longest_path(&graph);
    report::write_result(std::io::stdout().lock(), &best)?;

    Ok(())
}
