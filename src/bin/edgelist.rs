//! Prints an adjacency list next to the edge list derived from it.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use edgelist::report::{example_graph, print_report};
use edgelist::{convert_with, io::load_adjacency, AdjacencyList, OutputFormat, Report, Strategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "edgelist",
    version,
    about = "Convert an adjacency list into an edge list"
)]
struct Cli {
    #[arg(
        long,
        short,
        value_name = "FILE",
        help = "JSON adjacency list (`-` for stdin); defaults to the built-in example"
    )]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text, help = "Output format")]
    format: FormatArg,

    #[arg(long, help = "Convert on the rayon thread pool when available")]
    parallel: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("edgelist=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph: AdjacencyList = match &cli.input {
        Some(path) => load_adjacency(path)
            .with_context(|| format!("failed to load adjacency list from {}", path.display()))?,
        None => example_graph().context("failed to build the example graph")?,
    };

    let strategy = if cli.parallel {
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };
    let edges = convert_with(&graph, strategy);
    info!(
        vertices = graph.vertex_count(),
        edges = edges.len(),
        ?strategy,
        "conversion finished"
    );

    print_report(&Report::new(&graph, &edges), cli.format.into()).context("failed to write report")?;
    Ok(())
}
