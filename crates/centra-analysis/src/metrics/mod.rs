//! Centrality measures over weighted, undirected graphs.
//!
//! # Overview
//!
//! Each measure answers a different question about vertex importance:
//!
//! - **Closeness** (`closeness`): how short is the average route to everyone
//!   else? Connected graphs only.
//! - **Betweenness** (`betweenness`): how many shortest routes pass through
//!   the vertex? Connected graphs only.
//! - **Eigenvector** (`eigenvector`): is the vertex connected to other
//!   important vertices?
//! - **Harmonic** (`harmonic`): closeness that tolerates unreachable pairs.
//! - **Degree / weighted degree** (`degree`): how many (or how strong)
//!   direct connections does the vertex have?
//!
//! # Usage
//!
//! Every measure takes a [`Graph`] and returns [`Scores`] keyed by vertex
//! identifier. Edge weights are read as distances (costs); callers that hold
//! interaction strengths invert them first (see
//! [`crate::request::WeightPolicy`]).
//!
//! ```rust
//! use centra_analysis::metrics::{closeness, degree};
//! use centra_core::Graph;
//!
//! let mut g = Graph::new();
//! for id in ["a", "b", "c"] {
//!     g.add_vertex(id)?;
//! }
//! g.add_edge("a", "b", 1.0)?;
//! g.add_edge("b", "c", 1.0)?;
//!
//! let c = closeness(&g)?;
//! assert!((c["b"] - 1.0).abs() < 1e-12);
//! assert!((degree(&g)?["a"] - 0.5).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;
pub mod harmonic;

pub use betweenness::betweenness;
pub use closeness::closeness;
pub use degree::{degree, weighted_degree};
pub use eigenvector::{EigenvectorResult, eigenvector, eigenvector_default};
pub use harmonic::harmonic;

use centra_core::Graph;

use crate::error::AnalysisError;
use crate::Scores;

/// Fail with [`AnalysisError::DisconnectedGraph`] unless `graph` is connected.
pub(crate) fn require_connected(graph: &Graph, centrality: &'static str) -> Result<(), AnalysisError> {
    if graph.is_connected() {
        Ok(())
    } else {
        Err(AnalysisError::DisconnectedGraph { centrality })
    }
}

/// Pair ordered-vertex identifiers with values in the same index space.
pub(crate) fn scores_by_position(graph: &Graph, values: impl IntoIterator<Item = f64>) -> Scores {
    graph
        .ordered_identifiers()
        .into_iter()
        .map(str::to_owned)
        .zip(values)
        .collect()
}

/// Divide every score by the maximum, or by 1 when the maximum is 0.
pub(crate) fn max_normalize(mut scores: Scores) -> Scores {
    let max = scores.values().copied().fold(0.0, f64::max);
    let divisor = if max > 0.0 { max } else { 1.0 };
    for value in scores.values_mut() {
        *value /= divisor;
    }
    scores
}
