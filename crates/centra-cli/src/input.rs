//! Graph file loading.
//!
//! `*.json` files hold an adjacency map (`{"a": {"b": 1.0}, ...}`); anything
//! else is the plain-text format (vertex count, identifiers, then
//! `id1 id2 weight` edge lines). Either way the graph description is the file
//! stem.

use std::path::Path;

use anyhow::{Context, Result};
use centra_core::graph::read_graph_file;
use centra_core::{AdjacencyMap, Graph};
use tracing::{debug, instrument};

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a graph from `path`, picking the reader by extension.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let graph = if is_json(path) {
        let description = path
            .file_stem()
            .map_or_else(|| "None".to_owned(), |s| s.to_string_lossy().into_owned());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let map: AdjacencyMap = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        map.to_graph(&description)
            .with_context(|| format!("Failed to load {}", path.display()))?
    } else {
        read_graph_file(path).with_context(|| format!("Failed to load {}", path.display()))?
    };
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
