//! Borrowed views of vertices and edges.
//!
//! Views are `Copy` handles tied to the graph that produced them. They never
//! own data; every query goes back to the arena.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

use petgraph::visit::EdgeRef;

use crate::graph::model::{EdgeId, Graph, VertexId};

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A vertex of a [`Graph`].
///
/// Equality, ordering and hashing follow the identifier.
#[derive(Clone, Copy)]
pub struct Vertex<'g> {
    graph: &'g Graph,
    id: VertexId,
}

impl<'g> Vertex<'g> {
    pub(crate) const fn new(graph: &'g Graph, id: VertexId) -> Self {
        Self { graph, id }
    }

    /// The arena handle of this vertex.
    #[must_use]
    pub const fn id(self) -> VertexId {
        self.id
    }

    /// The identifier this vertex was created with.
    #[must_use]
    pub fn identifier(self) -> &'g str {
        self.graph.inner[self.id].as_str()
    }

    /// Number of incident edges.
    #[must_use]
    pub fn degree(self) -> usize {
        self.graph.inner.edges(self.id).count()
    }

    /// Adjacent vertices, in no particular order.
    pub fn neighbors(self) -> impl Iterator<Item = Vertex<'g>> {
        let graph = self.graph;
        graph
            .inner
            .neighbors(self.id)
            .map(move |id| Vertex::new(graph, id))
    }

    /// Incident edges, in no particular order.
    pub fn edges(self) -> impl Iterator<Item = Edge<'g>> {
        let graph = self.graph;
        graph
            .inner
            .edges(self.id)
            .map(move |edge| Edge {
                graph,
                id: edge.id(),
                a: edge.source(),
                b: edge.target(),
            })
    }

    /// Whether an edge joins this vertex to `other`.
    #[must_use]
    pub fn has_edge_with(self, other: VertexId) -> bool {
        self.graph.inner.find_edge(self.id, other).is_some()
    }

    /// The edge joining this vertex to `other`, if any.
    #[must_use]
    pub fn edge_with(self, other: VertexId) -> Option<Edge<'g>> {
        self.graph.edge_between(self.id, other)
    }

    /// Identifiers of every vertex reachable in at most `steps` hops,
    /// excluding this vertex itself.
    ///
    /// Weights are ignored; only hop count matters.
    #[must_use]
    pub fn reachable_within(self, steps: usize) -> BTreeSet<&'g str> {
        let mut seen: HashSet<VertexId> = HashSet::from([self.id]);
        let mut queue: VecDeque<(VertexId, usize)> = VecDeque::from([(self.id, 0)]);
        let mut reached = BTreeSet::new();

        while let Some((current, depth)) = queue.pop_front() {
            if depth == steps {
                continue;
            }
            for next in self.graph.inner.neighbors(current) {
                if seen.insert(next) {
                    reached.insert(self.graph.inner[next].as_str());
                    queue.push_back((next, depth + 1));
                }
            }
        }
        reached
    }
}

impl PartialEq for Vertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for Vertex<'_> {}

impl PartialOrd for Vertex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier().cmp(other.identifier())
    }
}

impl Hash for Vertex<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("identifier", &self.identifier())
            .field("degree", &self.degree())
            .finish()
    }
}

impl fmt::Display for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An undirected edge of a [`Graph`].
#[derive(Clone, Copy)]
pub struct Edge<'g> {
    graph: &'g Graph,
    id: EdgeId,
    a: VertexId,
    b: VertexId,
}

impl<'g> Edge<'g> {
    pub(crate) fn new(graph: &'g Graph, id: EdgeId) -> Option<Self> {
        let (a, b) = graph.inner.edge_endpoints(id)?;
        Some(Self { graph, id, a, b })
    }

    /// The arena handle of this edge.
    #[must_use]
    pub const fn id(self) -> EdgeId {
        self.id
    }

    /// Both endpoints. Their order carries no meaning.
    #[must_use]
    pub const fn endpoints(self) -> (Vertex<'g>, Vertex<'g>) {
        (Vertex::new(self.graph, self.a), Vertex::new(self.graph, self.b))
    }

    /// The endpoint that is not `vertex`, or `None` if `vertex` is not an
    /// endpoint.
    #[must_use]
    pub fn opposite(self, vertex: VertexId) -> Option<Vertex<'g>> {
        if vertex == self.a {
            Some(Vertex::new(self.graph, self.b))
        } else if vertex == self.b {
            Some(Vertex::new(self.graph, self.a))
        } else {
            None
        }
    }

    /// The stored weight.
    #[must_use]
    pub fn weight(self) -> f64 {
        self.graph.inner[self.id]
    }

    /// The stored weight, or 1 when `unweighted` is set.
    #[must_use]
    pub fn weight_or_unit(self, unweighted: bool) -> f64 {
        if unweighted { 1.0 } else { self.weight() }
    }
}

impl fmt::Debug for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        f.debug_struct("Edge")
            .field("a", &a.identifier())
            .field("b", &b.identifier())
            .field("weight", &self.weight())
            .finish()
    }
}
