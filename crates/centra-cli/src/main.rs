#![forbid(unsafe_code)]

mod cmd;
mod config;
mod input;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "centra: centrality analysis for weighted interaction graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to pretty on a terminal, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Read configuration from this file instead of the user config.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Compute centrality scores",
        long_about = "Compute centrality scores for every vertex of a graph file. Weights are \
                      interaction strengths and are inverted, then normalized, before analysis.",
        after_help = "EXAMPLES:\n    # Every centrality\n    centra analyze team.graph\n\n    # Selected centralities plus centralization\n    centra analyze team.graph -c closeness -c eigenvector --centralization\n\n    # Deterministic eigenvector run\n    centra analyze team.json --max-iterations 500 --format json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Print the flow-distance graph",
        long_about = "Connect every pair of vertices with an edge weighted by their shortest-path \
                      distance and print the result as an adjacency map.",
        after_help = "EXAMPLES:\n    # Adjacency map of all-pairs distances\n    centra flow team.graph --format json"
    )]
    Flow(cmd::flow::FlowArgs),

    #[command(
        about = "Split a graph into two independent sides",
        after_help = "EXAMPLES:\n    # Blue/red sides, or \"not bipartite\"\n    centra partition team.graph"
    )]
    Partition(cmd::partition::PartitionArgs),

    #[command(
        about = "Summarize a graph file",
        after_help = "EXAMPLES:\n    # Summary\n    centra info team.graph\n\n    # Content hash only\n    centra info team.graph --format json | jq -r .content_hash"
    )]
    Info(cmd::info::InfoArgs),
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CENTRA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "centra=debug,info"
        } else {
            "centra=info,warn"
        })
    });

    let format = env::var("CENTRA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let output = resolve_output_mode(cli.format, cli.json, None);
            // Nothing else to report if stderr itself fails.
            let _ = render_error(output, &CliError::from(&err));
            return ExitCode::FAILURE;
        }
    };
    let output = resolve_output_mode(cli.format, cli.json, config.output_mode());
    debug!(?output, "resolved output mode");

    let command_result = match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, &config, output),
        Commands::Flow(ref args) => cmd::flow::run_flow(args, output),
        Commands::Partition(ref args) => cmd::partition::run_partition(args, output),
        Commands::Info(ref args) => cmd::info::run_info(args, output),
    };

    match command_result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = render_error(output, &CliError::from(&err));
            ExitCode::FAILURE
        }
    }
}
