//! Harmonic centrality.
//!
//! `harmonic(i) = Σ_{j != i} 1 / dist(i, j) / (n - 1)`. Unreachable vertices
//! contribute `1 / inf = 0`, so disconnected graphs are fine. A single vertex
//! scores 1.

use centra_core::Graph;
use tracing::instrument;

use super::scores_by_position;
use crate::error::AnalysisError;
use crate::paths::floyd_warshall;
use crate::Scores;

/// Harmonic centrality of every vertex.
///
/// # Errors
///
/// Never fails today; the `Result` keeps the signature uniform with the
/// other measures.
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn harmonic(graph: &Graph) -> Result<Scores, AnalysisError> {
    let n = graph.vertex_count();
    if n == 1 {
        return Ok(scores_by_position(graph, [1.0]));
    }

    let dist = floyd_warshall(graph);
    let others = n.saturating_sub(1) as f64;
    let values = (0..n).map(|i| {
        let total: f64 = (0..n).filter(|&j| j != i).map(|j| 1.0 / dist[(i, j)]).sum();
        total / others
    });
    Ok(scores_by_position(graph, values))
}
