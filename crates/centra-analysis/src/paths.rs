//! All-pairs shortest paths (Floyd–Warshall) with optional successor sets.
//!
//! # Overview
//!
//! Distances live in ordered-vertex index space: row `i` is the vertex at
//! position `i` of [`Graph::ordered_ids`]. Unreachable pairs keep `+inf`.
//! The diagonal is forced to 0 before relaxation.
//!
//! # Successor sets
//!
//! [`floyd_warshall_with_successors`] additionally records, for every pair
//! `(i, j)`, the set of vertices that can follow `i` on *some* shortest path
//! to `j`:
//!
//! - Seed: `next[i][j] = {j}` for every direct edge with finite weight.
//! - Strictly shorter path through `k`: `next[i][j] = next[i][k]`.
//! - Equally short (finite) path through `k`: `next[i][j] ∪= next[i][k]`.
//!
//! [`reconstruct_paths`] expands the sets into every shortest path.

use std::collections::BTreeSet;

use centra_core::Graph;
use nalgebra::DMatrix;
use tracing::instrument;

/// Shortest-path distances in ordered-vertex index space.
pub type DistanceMatrix = DMatrix<f64>;

/// Successor sets: `next[i][j]` holds possible second vertices on shortest
/// `i → j` paths.
pub type Successors = Vec<Vec<BTreeSet<usize>>>;

/// All-pairs shortest-path distances.
#[must_use]
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn floyd_warshall(graph: &Graph) -> DistanceMatrix {
    let mut dist = graph.weighted_adjacency_matrix();
    let n = dist.nrows();
    for i in 0..n {
        dist[(i, i)] = 0.0;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[(i, k)] + dist[(k, j)];
                if dist[(i, j)] > through {
                    dist[(i, j)] = through;
                }
            }
        }
    }
    dist
}

/// All-pairs shortest-path distances plus successor sets for path
/// reconstruction.
#[must_use]
#[allow(clippy::float_cmp)]
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn floyd_warshall_with_successors(graph: &Graph) -> (DistanceMatrix, Successors) {
    let mut dist = graph.weighted_adjacency_matrix();
    let n = dist.nrows();
    let mut next: Successors = vec![vec![BTreeSet::new(); n]; n];

    for i in 0..n {
        dist[(i, i)] = 0.0;
        for j in 0..n {
            if i != j && dist[(i, j)].is_finite() {
                next[i][j].insert(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                // Relaxing through an endpoint changes nothing.
                if k == i || k == j {
                    continue;
                }
                let through = dist[(i, k)] + dist[(k, j)];
                if through < dist[(i, j)] {
                    dist[(i, j)] = through;
                    next[i][j] = next[i][k].clone();
                } else if through.is_finite() && through == dist[(i, j)] {
                    let extra = next[i][k].clone();
                    next[i][j].extend(extra);
                }
            }
        }
    }
    (dist, next)
}

/// Every shortest path from `s` to `t`, as sequences of vertex positions
/// including both endpoints.
///
/// `[[s]]` when `s == t`; empty when `t` is unreachable from `s`. Only simple
/// paths are produced: zero-weight edges can make successor sets cyclic, and
/// a vertex already on the current path is never revisited.
#[must_use]
pub fn reconstruct_paths(next: &Successors, s: usize, t: usize) -> Vec<Vec<usize>> {
    let mut on_path = vec![false; next.len().max(s + 1)];
    expand(next, s, t, &mut on_path)
}

fn expand(next: &Successors, s: usize, t: usize, on_path: &mut [bool]) -> Vec<Vec<usize>> {
    if s == t {
        return vec![vec![s]];
    }
    let Some(hops) = next.get(s).and_then(|row| row.get(t)) else {
        return Vec::new();
    };
    on_path[s] = true;
    let mut paths = Vec::new();
    for &hop in hops {
        if on_path.get(hop).copied().unwrap_or(true) {
            continue;
        }
        for rest in expand(next, hop, t, on_path) {
            let mut path = Vec::with_capacity(rest.len() + 1);
            path.push(s);
            path.extend(rest);
            paths.push(path);
        }
    }
    on_path[s] = false;
    paths
}
