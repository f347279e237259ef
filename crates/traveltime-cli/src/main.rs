use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use traveltime_lib::{find_fastest_route, load_connections_file, Graph, RouteResult};

#[derive(Parser, Debug)]
#[command(author, version, about = "Travel-time routing utilities")]
struct Cli {
    /// Path to the semicolon-delimited connection dataset.
    #[arg(long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the fastest route between two locations in the dataset.
    Route {
        /// Origin location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print location and connection counts for the dataset.
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut graph = Graph::new();
    load_connections_file(&mut graph, &cli.data)
        .with_context(|| format!("failed to load dataset from {}", cli.data.display()))?;

    match cli.command {
        Command::Route { from, to, format } => handle_route(&graph, &from, &to, format),
        Command::Stats => handle_stats(&graph),
    }
}

fn handle_route(graph: &Graph, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let result = find_fastest_route(graph, from, to);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_route(from, to, &result),
    }

    Ok(())
}

fn print_route(from: &str, to: &str, result: &RouteResult) {
    if !result.found() {
        println!("No route found between {from} and {to}");
        return;
    }

    println!(
        "Fastest route ({} min, {} hops):",
        result.total_time,
        result.hop_count()
    );
    for stop in &result.route {
        println!("- {stop}");
    }
}

fn handle_stats(graph: &Graph) -> Result<()> {
    println!("Locations: {}", graph.location_count());
    println!("Connections: {}", graph.connection_count());
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
