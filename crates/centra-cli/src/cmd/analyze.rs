//! `centra analyze` — centrality scores for every vertex of a graph file.
//!
//! Weights in the file are interaction strengths. Unless disabled, they are
//! inverted and then normalized into distances before any measure runs.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use centra_analysis::{AnalysisReport, AnalysisRequest, PowerIterationConfig, WeightPolicy};
use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::input::load_graph;
use crate::output::{OutputMode, format_score, pretty_kv, pretty_section, render_mode};

/// Arguments for `centra analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Graph file (plain text, or an adjacency map if it ends in `.json`).
    pub file: PathBuf,

    /// Centrality to compute; repeat for several. Defaults to all six.
    #[arg(short = 'c', long = "centrality", value_name = "NAME")]
    pub centralities: Vec<String>,

    /// Also compute the centralization of each requested centrality.
    #[arg(long)]
    pub centralization: bool,

    /// Use weights as distances instead of inverting them.
    #[arg(long)]
    pub no_invert: bool,

    /// Skip scaling weights so the largest is 1.
    #[arg(long)]
    pub no_normalize: bool,

    /// Eigenvector convergence tolerance.
    #[arg(long, value_name = "F")]
    pub tolerance: Option<f64>,

    /// Wall-clock budget for eigenvector power iteration.
    #[arg(long, value_name = "MS")]
    pub max_time_ms: Option<u64>,

    /// Fixed power-iteration cap; replaces the wall-clock budget.
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,
}

impl AnalyzeArgs {
    fn request(&self) -> Result<AnalysisRequest> {
        if self.centralities.is_empty() {
            return Ok(AnalysisRequest {
                centralization: self.centralization,
                ..AnalysisRequest::default()
            });
        }
        Ok(AnalysisRequest::parse(&self.centralities, self.centralization)?)
    }

    fn weight_policy(&self, config: &Config) -> WeightPolicy {
        let base = config.weight_policy();
        WeightPolicy {
            invert: base.invert && !self.no_invert,
            normalize: base.normalize && !self.no_normalize,
        }
    }

    fn power_iteration(&self, config: &Config) -> PowerIterationConfig {
        let mut eigenvector = config.eigenvector.clone();
        if let Some(tolerance) = self.tolerance {
            eigenvector.tolerance = tolerance;
        }
        if let Some(ms) = self.max_time_ms {
            eigenvector.max_time_ms = ms;
            eigenvector.max_iterations = None;
        }
        if let Some(cap) = self.max_iterations {
            eigenvector.max_iterations = Some(cap);
        }
        eigenvector.power_iteration()
    }
}

/// Execute `centra analyze`.
pub fn run_analyze(args: &AnalyzeArgs, config: &Config, output: OutputMode) -> Result<()> {
    let request = args.request()?;
    let graph = load_graph(&args.file)?;
    let prepared = AnalysisRequest::prepare(&graph, args.weight_policy(config));
    let report = request.run(&prepared, &args.power_iteration(config))?;
    info!(graph = %graph.description(), "rendering report");
    render_mode(output, &report, render_text, render_pretty)
}

/// One `centrality<TAB>vertex<TAB>score` row per score, then one
/// `centralization<TAB>centrality<TAB>value` row per centralization.
fn render_text(report: &AnalysisReport, w: &mut dyn Write) -> io::Result<()> {
    for (centrality, scores) in &report.centralities {
        for (vertex, score) in scores {
            writeln!(w, "{centrality}\t{vertex}\t{score}")?;
        }
    }
    if let Some(centralization) = &report.centralization {
        for (centrality, value) in centralization {
            writeln!(w, "centralization\t{centrality}\t{value}")?;
        }
    }
    Ok(())
}

fn render_pretty(report: &AnalysisReport, w: &mut dyn Write) -> io::Result<()> {
    let mut first = true;
    for (centrality, scores) in &report.centralities {
        if !first {
            writeln!(w)?;
        }
        first = false;
        pretty_section(w, centrality)?;
        if scores.is_empty() {
            writeln!(w, "(no vertices)")?;
        }
        for (vertex, score) in scores {
            pretty_kv(w, vertex, format_score(*score))?;
        }
    }
    if let Some(centralization) = &report.centralization {
        writeln!(w)?;
        pretty_section(w, "centralization")?;
        for (centrality, value) in centralization {
            pretty_kv(w, centrality, format_score(*value))?;
        }
    }
    Ok(())
}
