//! Bipartite 2-coloring.
//!
//! # Algorithm
//!
//! Depth-first traversal over every connected component, starting each
//! component at its lowest identifier (ordered-vertex order) and coloring it
//! blue. Neighbors get the opposite color; finding a neighbor already holding
//! the same color means an odd cycle and the graph is not bipartite.
//!
//! Isolated vertices are blue. A graph with no vertices is trivially
//! bipartite with two empty sides.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, instrument};

use crate::graph::{Graph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Blue,
    Red,
}

impl Color {
    const fn flip(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

/// The two sides of a bipartite graph, by vertex identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BipartitePartition {
    pub blue: BTreeSet<String>,
    pub red: BTreeSet<String>,
}

impl BipartitePartition {
    /// Blue identifiers in ordered-vertex order.
    #[must_use]
    pub fn blue_ordered(&self) -> Vec<&str> {
        self.blue.iter().map(String::as_str).collect()
    }

    /// Red identifiers in ordered-vertex order.
    #[must_use]
    pub fn red_ordered(&self) -> Vec<&str> {
        self.red.iter().map(String::as_str).collect()
    }
}

/// Attempt to 2-color `graph`.
///
/// Returns `None` when the graph contains an odd cycle.
#[must_use]
#[instrument(skip(graph), fields(graph = %graph.description(), vertices = graph.vertex_count()))]
pub fn bipartite_partition(graph: &Graph) -> Option<BipartitePartition> {
    let mut colors: HashMap<VertexId, Color> = HashMap::with_capacity(graph.vertex_count());
    let mut stack: Vec<VertexId> = Vec::new();

    for &root in graph.ordered_ids() {
        if colors.contains_key(&root) {
            continue;
        }
        colors.insert(root, Color::Blue);
        stack.push(root);

        while let Some(current) = stack.pop() {
            let color = colors[&current];
            let vertex = graph.vertex_by_id(current)?;
            for neighbor in vertex.neighbors() {
                match colors.get(&neighbor.id()) {
                    Some(&c) if c == color => {
                        debug!(
                            a = vertex.identifier(),
                            b = neighbor.identifier(),
                            "odd cycle, not bipartite"
                        );
                        return None;
                    }
                    Some(_) => {}
                    None => {
                        colors.insert(neighbor.id(), color.flip());
                        stack.push(neighbor.id());
                    }
                }
            }
        }
    }

    let mut partition = BipartitePartition::default();
    for (id, color) in colors {
        let Some(name) = graph.identifier(id) else {
            continue;
        };
        match color {
            Color::Blue => partition.blue.insert(name.to_owned()),
            Color::Red => partition.red.insert(name.to_owned()),
        };
    }
    Some(partition)
}
