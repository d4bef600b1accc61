//! Degree and weighted-degree centrality.
//!
//! Both are normalized by their maximum over the graph. When that maximum is
//! 0 (every vertex isolated) the divisor is 1 and every score is 0.
//!
//! Weighted degree sums `1 / w` over incident edges: stored weights are
//! costs, and a cheap edge is a strong connection.

use centra_core::Graph;
use tracing::instrument;

use super::max_normalize;
use crate::error::AnalysisError;
use crate::Scores;

/// Incident edge count divided by the maximum degree.
///
/// # Errors
///
/// Never fails; the `Result` keeps the signature uniform with the other
/// measures.
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn degree(graph: &Graph) -> Result<Scores, AnalysisError> {
    let raw = graph
        .vertices()
        .map(|v| (v.identifier().to_owned(), v.degree() as f64))
        .collect();
    Ok(max_normalize(raw))
}

/// Sum of reciprocal incident weights divided by the maximum such sum.
///
/// # Errors
///
/// Never fails; see [`degree`].
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn weighted_degree(graph: &Graph) -> Result<Scores, AnalysisError> {
    let raw = graph
        .vertices()
        .map(|v| {
            let strength: f64 = v.edges().map(|e| 1.0 / e.weight()).sum();
            (v.identifier().to_owned(), strength)
        })
        .collect();
    Ok(max_normalize(raw))
}
