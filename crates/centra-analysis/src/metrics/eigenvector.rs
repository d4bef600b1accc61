//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores a vertex by the scores of its neighbors: it
//! is the dominant eigenvector of the unweighted adjacency matrix.
//!
//! # Algorithm
//!
//! Non-bipartite graphs run [`power_iteration`] on the adjacency matrix
//! directly.
//!
//! On a bipartite graph the adjacency spectrum is symmetric (`λ` and `-λ`
//! are both eigenvalues), so plain power iteration oscillates. Instead:
//!
//! 1. Split the vertices into blue and red sides.
//! 2. Build the blue×red incidence matrix `A` (1 where connected).
//! 3. Run power iteration on `A·Aᵗ` (blue side) and `Aᵗ·A` (red side), each
//!    with a third of the time budget.
//! 4. Concatenate blue then red and normalize the result.
//!
//! # Output
//!
//! Returns an [`EigenvectorResult`] with per-vertex scores, the number of
//! iterations performed, and whether every run converged. Weights are
//! ignored.

use centra_core::{Graph, GraphError, bipartite_partition, linalg};
use nalgebra::DMatrix;
use tracing::{debug, instrument};

use super::scores_by_position;
use crate::error::AnalysisError;
use crate::power::{PowerIterationConfig, power_iteration};
use crate::Scores;

/// Result of eigenvector centrality computation.
#[derive(Debug, Clone)]
pub struct EigenvectorResult {
    /// Eigenvector centrality scores: vertex identifier → score.
    pub scores: Scores,
    /// Iterations performed (summed over both runs in the bipartite case).
    pub iterations: usize,
    /// Whether every power-iteration run reached the tolerance.
    pub converged: bool,
    /// Whether the bipartite correction was used.
    pub bipartite: bool,
}

/// Eigenvector centrality with the default tolerance (1e-5) and 1000 ms budget.
///
/// # Errors
///
/// See [`eigenvector`].
pub fn eigenvector_default(graph: &Graph) -> Result<EigenvectorResult, AnalysisError> {
    eigenvector(graph, &PowerIterationConfig::default())
}

/// Approximate eigenvector centrality of every vertex.
///
/// An empty graph yields empty scores.
///
/// # Errors
///
/// Returns [`AnalysisError::Graph`] wrapping [`GraphError::ZeroVector`] when
/// the graph has no edges (one bipartite side is empty, or the adjacency
/// matrix is zero).
#[instrument(skip(graph, config), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn eigenvector(
    graph: &Graph,
    config: &PowerIterationConfig,
) -> Result<EigenvectorResult, AnalysisError> {
    if graph.is_empty() {
        return Ok(EigenvectorResult {
            scores: Scores::new(),
            iterations: 0,
            converged: true,
            bipartite: false,
        });
    }

    let Some(partition) = bipartite_partition(graph) else {
        let outcome = power_iteration(&graph.unweighted_adjacency_matrix(), config)?;
        return Ok(EigenvectorResult {
            scores: scores_by_position(graph, outcome.vector.iter().copied()),
            iterations: outcome.iterations,
            converged: outcome.converged,
            bipartite: false,
        });
    };

    let blue = partition.blue_ordered();
    let red = partition.red_ordered();
    if blue.is_empty() || red.is_empty() {
        return Err(GraphError::ZeroVector.into());
    }
    debug!(blue = blue.len(), red = red.len(), "bipartite correction");

    let incidence = DMatrix::from_fn(blue.len(), red.len(), |i, j| {
        if graph.edge(blue[i], red[j]).is_some() { 1.0 } else { 0.0 }
    });
    let transposed = linalg::transpose(&incidence);
    let blue_matrix = linalg::multiply(&incidence, &transposed)?;
    let red_matrix = linalg::multiply(&transposed, &incidence)?;

    let half = config.with_stop(config.stop.for_bipartite_half());
    let blue_run = power_iteration(&blue_matrix, &half)?;
    let red_run = power_iteration(&red_matrix, &half)?;
    let combined = linalg::normalize(&linalg::compose_vectors(&blue_run.vector, &red_run.vector))?;

    let scores = blue
        .iter()
        .chain(red.iter())
        .map(|id| (*id).to_owned())
        .zip(combined.iter().copied())
        .collect();

    Ok(EigenvectorResult {
        scores,
        iterations: blue_run.iterations + red_run.iterations,
        converged: blue_run.converged && red_run.converged,
        bipartite: true,
    })
}
