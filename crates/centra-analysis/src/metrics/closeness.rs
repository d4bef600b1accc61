//! Closeness centrality.
//!
//! `closeness(i) = (n - 1) / Σ_j dist(i, j)` over Floyd–Warshall distances.
//! A single vertex scores 1.

use centra_core::Graph;
use tracing::instrument;

use super::{require_connected, scores_by_position};
use crate::error::AnalysisError;
use crate::paths::floyd_warshall;
use crate::Scores;

/// Closeness centrality of every vertex.
///
/// # Errors
///
/// Returns [`AnalysisError::DisconnectedGraph`] if the graph is not connected.
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness(graph: &Graph) -> Result<Scores, AnalysisError> {
    require_connected(graph, "closeness")?;
    let n = graph.vertex_count();
    if n == 1 {
        return Ok(scores_by_position(graph, [1.0]));
    }

    let dist = floyd_warshall(graph);
    let others = (n - 1) as f64;
    let values = dist.row_iter().map(|row| others / row.sum());
    Ok(scores_by_position(graph, values))
}
