//! Freeman centralization.
//!
//! # Overview
//!
//! Centralization measures how unevenly a centrality is spread over a graph:
//!
//! ```text
//! C(G) = Σ_v (max - c(v)) over G  /  Σ_v (max - c(v)) over star(n)
//! ```
//!
//! The star graph on the same number of vertices is the most centralized
//! graph possible, so stars score 1 and regular graphs score 0. A single
//! vertex gives `0 / 0`, which propagates as NaN.

use centra_core::Graph;
use tracing::{debug, instrument};

use crate::error::AnalysisError;
use crate::Scores;

/// Centralization of `graph` under the centrality function `measure`.
///
/// `measure` runs twice: once on `graph` and once on `Graph::star(n)`.
///
/// # Errors
///
/// Propagates any error from `measure`, and returns
/// [`AnalysisError::EmptyInput`] when either score map is empty.
#[instrument(skip(graph, measure), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn centralization<F>(graph: &Graph, measure: F) -> Result<f64, AnalysisError>
where
    F: Fn(&Graph) -> Result<Scores, AnalysisError>,
{
    let observed = measure(graph)?;
    let reference = measure(&Graph::star(graph.vertex_count()))?;
    centralization_from_scores(&observed, &reference)
}

/// Centralization from scores already computed on the graph (`observed`) and
/// on the star with the same vertex count (`reference`).
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when either score map is empty.
pub fn centralization_from_scores(observed: &Scores, reference: &Scores) -> Result<f64, AnalysisError> {
    let observed = sum_of_differences(observed)?;
    let reference = sum_of_differences(reference)?;
    debug!(observed, reference, "centralization sums");
    Ok(observed / reference)
}

fn sum_of_differences(scores: &Scores) -> Result<f64, AnalysisError> {
    let max = scores
        .values()
        .copied()
        .reduce(f64::max)
        .ok_or(AnalysisError::EmptyInput)?;
    Ok(scores.values().map(|c| max - c).sum())
}
