//! `centra flow` — the flow-distance graph of a graph file.
//!
//! The result connects every pair of vertices with an edge weighted by their
//! shortest-path distance in the input. Weights are read as distances
//! exactly as stored in the file.
//!
//! JSON output is an adjacency map. Pairs with no connecting path carry an
//! infinite distance, which JSON renders as `null`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use centra_analysis::flow_distance;
use centra_core::AdjacencyMap;
use clap::Args;

use crate::input::load_graph;
use crate::output::{OutputMode, format_score, pretty_kv, pretty_section, render_mode};

/// Arguments for `centra flow`.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Graph file (plain text, or an adjacency map if it ends in `.json`).
    pub file: PathBuf,
}

/// Execute `centra flow`.
pub fn run_flow(args: &FlowArgs, output: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file)?;
    let flow = flow_distance(&graph)?;
    let map = AdjacencyMap::from(&flow);
    render_mode(output, &map, render_text, |map, w| {
        render_pretty(flow.description(), map, w)
    })
}

/// Each undirected edge once, as `a<TAB>b<TAB>distance` with `a < b`.
fn render_text(map: &AdjacencyMap, w: &mut dyn Write) -> io::Result<()> {
    for (a, neighbors) in &map.0 {
        for (b, distance) in neighbors.iter().filter(|(b, _)| *b > a) {
            writeln!(w, "{a}\t{b}\t{distance}")?;
        }
    }
    Ok(())
}

fn render_pretty(description: &str, map: &AdjacencyMap, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, description)?;
    for (a, neighbors) in &map.0 {
        let row = neighbors
            .iter()
            .map(|(b, distance)| format!("{b}={}", format_score(*distance)))
            .collect::<Vec<_>>()
            .join("  ");
        pretty_kv(w, a, row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use centra_core::Graph;

    use super::*;

    fn path_flow() -> AdjacencyMap {
        let mut g = Graph::with_description("path");
        for id in ["a", "b", "c"] {
            g.add_vertex(id).expect("add");
        }
        g.add_edge("a", "b", 1.0).expect("edge");
        g.add_edge("b", "c", 2.0).expect("edge");
        AdjacencyMap::from(&flow_distance(&g).expect("flow"))
    }

    #[test]
    fn text_lists_each_pair_once() {
        let mut buf = Vec::new();
        render_text(&path_flow(), &mut buf).expect("render");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "a\tb\t1\na\tc\t3\nb\tc\t2\n"
        );
    }

    #[test]
    fn pretty_rows_list_neighbors() {
        let mut buf = Vec::new();
        render_pretty("path-flow", &path_flow(), &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("path-flow\n"));
        assert!(text.contains("b=1.000000  c=3.000000"));
    }
}
