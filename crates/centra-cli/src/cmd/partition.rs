//! `centra partition` — bipartite 2-coloring of a graph file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use centra_core::bipartite_partition;
use clap::Args;
use serde::Serialize;

use crate::input::load_graph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `centra partition`.
#[derive(Args, Debug)]
pub struct PartitionArgs {
    /// Graph file (plain text, or an adjacency map if it ends in `.json`).
    pub file: PathBuf,
}

/// Report payload for `centra partition`.
#[derive(Debug, Serialize)]
pub struct PartitionReport {
    pub bipartite: bool,
    pub blue: Vec<String>,
    pub red: Vec<String>,
}

/// Execute `centra partition`.
pub fn run_partition(args: &PartitionArgs, output: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file)?;
    let report = bipartite_partition(&graph).map_or_else(
        || PartitionReport {
            bipartite: false,
            blue: Vec::new(),
            red: Vec::new(),
        },
        |partition| PartitionReport {
            bipartite: true,
            blue: partition.blue.into_iter().collect(),
            red: partition.red.into_iter().collect(),
        },
    );
    render_mode(output, &report, render_text, render_pretty)
}

fn render_text(report: &PartitionReport, w: &mut dyn Write) -> io::Result<()> {
    if !report.bipartite {
        return writeln!(w, "not bipartite");
    }
    for vertex in &report.blue {
        writeln!(w, "blue\t{vertex}")?;
    }
    for vertex in &report.red {
        writeln!(w, "red\t{vertex}")?;
    }
    Ok(())
}

fn render_pretty(report: &PartitionReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Bipartite partition")?;
    if !report.bipartite {
        return writeln!(w, "not bipartite (odd cycle)");
    }
    pretty_kv(w, "blue", report.blue.join(", "))?;
    pretty_kv(w, "red", report.red.join(", "))
}
