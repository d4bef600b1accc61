//! Flow-distance transform.

use centra_core::Graph;
use tracing::instrument;

use crate::error::AnalysisError;
use crate::paths::floyd_warshall;

/// Complete graph of shortest-path distances.
///
/// The result has the same vertices as `graph`, is described as
/// `"<description>-flow"`, and joins every pair of distinct vertices with an
/// edge weighted by their shortest-path distance. Unreachable pairs get an
/// infinite weight.
///
/// # Errors
///
/// Only structural errors from building the new graph, which cannot occur for
/// a well-formed input.
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn flow_distance(graph: &Graph) -> Result<Graph, AnalysisError> {
    let dist = floyd_warshall(graph);
    let ids = graph.ordered_identifiers();

    let mut flow = Graph::with_description(format!("{}-flow", graph.description()));
    for id in &ids {
        flow.add_vertex(*id)?;
    }
    for (i, a) in ids.iter().enumerate() {
        for (j, b) in ids.iter().enumerate().skip(i + 1) {
            flow.add_edge(a, b, dist[(i, j)])?;
        }
    }
    Ok(flow)
}
