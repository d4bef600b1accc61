//! Betweenness centrality by shortest-path enumeration.
//!
//! # Algorithm
//!
//! 1. Floyd–Warshall with successor sets ([`crate::paths`]).
//! 2. For every ordered pair `(s, t)`, `s != t`, enumerate all `L` shortest
//!    paths and credit `1 / L` to every interior vertex of each path.
//! 3. Divide by `(n - 1)(n - 2)`.
//!
//! Enumeration is exponential when many shortest paths tie. That is fine for
//! graphs of tens to low hundreds of vertices; Brandes' accumulation gives
//! the same numbers in polynomial time if larger graphs show up.
//!
//! With two or fewer vertices there are no interior vertices and every score
//! is 0.

use centra_core::Graph;
use tracing::{debug, instrument};

use super::{require_connected, scores_by_position};
use crate::error::AnalysisError;
use crate::paths::{floyd_warshall_with_successors, reconstruct_paths};
use crate::Scores;

/// Betweenness centrality of every vertex.
///
/// # Errors
///
/// Returns [`AnalysisError::DisconnectedGraph`] if the graph is not connected.
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness(graph: &Graph) -> Result<Scores, AnalysisError> {
    require_connected(graph, "betweenness")?;
    let n = graph.vertex_count();
    if n <= 2 {
        return Ok(scores_by_position(graph, std::iter::repeat(0.0)));
    }

    let (_, next) = floyd_warshall_with_successors(graph);
    let mut credit = vec![0.0; n];
    let mut enumerated = 0usize;

    for s in 0..n {
        for t in 0..n {
            if s == t {
                continue;
            }
            let paths = reconstruct_paths(&next, s, t);
            if paths.is_empty() {
                continue;
            }
            enumerated += paths.len();
            let share = 1.0 / paths.len() as f64;
            for path in &paths {
                for &v in path {
                    if v != s && v != t {
                        credit[v] += share;
                    }
                }
            }
        }
    }
    debug!(paths = enumerated, "enumerated shortest paths");

    let pairs = ((n - 1) * (n - 2)) as f64;
    Ok(scores_by_position(graph, credit.into_iter().map(|c| c / pairs)))
}
