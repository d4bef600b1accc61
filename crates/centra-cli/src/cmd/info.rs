//! `centra info` — graph summary and content fingerprint.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use centra_core::Graph;
use clap::Args;
use serde::Serialize;

use crate::input::load_graph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `centra info`.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Graph file (plain text, or an adjacency map if it ends in `.json`).
    pub file: PathBuf,
}

/// Report payload for `centra info`.
#[derive(Debug, Serialize)]
pub struct GraphInfo {
    pub description: String,
    pub vertices: usize,
    pub edges: usize,
    pub connected: bool,
    pub content_hash: String,
}

impl GraphInfo {
    fn of(graph: &Graph) -> Self {
        Self {
            description: graph.description().to_owned(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            connected: graph.is_connected(),
            content_hash: graph.content_hash(),
        }
    }
}

/// Execute `centra info`.
pub fn run_info(args: &InfoArgs, output: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file)?;
    render_mode(output, &GraphInfo::of(&graph), render_text, render_pretty)
}

fn render_text(info: &GraphInfo, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "description\t{}", info.description)?;
    writeln!(w, "vertices\t{}", info.vertices)?;
    writeln!(w, "edges\t{}", info.edges)?;
    writeln!(w, "connected\t{}", info.connected)?;
    writeln!(w, "hash\t{}", info.content_hash)
}

fn render_pretty(info: &GraphInfo, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &info.description)?;
    pretty_kv(w, "vertices", info.vertices.to_string())?;
    pretty_kv(w, "edges", info.edges.to_string())?;
    pretty_kv(w, "connected", if info.connected { "yes" } else { "no" })?;
    pretty_kv(w, "hash", &info.content_hash)
}
