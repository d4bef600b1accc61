//! The arena-indexed graph that owns vertices and weighted edges.
//!
//! # Invariants
//!
//! - Vertex identifiers are unique (`index` is a bijection onto live nodes).
//! - `ordered` holds every live vertex handle, sorted by identifier.
//! - At most one edge joins any two vertices and no edge joins a vertex to
//!   itself.
//!
//! Weights are plain `f64` values. Infinite and NaN weights are stored as
//! given; arithmetic on them follows IEEE 754 and is never trapped.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;

use nalgebra::DMatrix;
use petgraph::{
    stable_graph::{EdgeIndex, NodeIndex, StableUnGraph},
    visit::Bfs,
};
use tracing::{instrument, trace};

use crate::error::GraphError;
use crate::graph::view::{Edge, Vertex};

/// Handle of a vertex inside one [`Graph`].
pub type VertexId = NodeIndex;

/// Handle of an edge inside one [`Graph`].
pub type EdgeId = EdgeIndex;

const DEFAULT_DESCRIPTION: &str = "None";

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected, weighted, simple graph.
///
/// Handles returned by one graph are meaningless for another; methods that
/// take a handle report [`GraphError::UnknownVertex`] (or return `None`) when
/// it does not name a live vertex.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(super) inner: StableUnGraph<String, f64>,
    index: HashMap<String, VertexId>,
    ordered: Vec<VertexId>,
    description: String,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph described as `"None"`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_description(DEFAULT_DESCRIPTION)
    }

    /// Create an empty graph with a description label used for tracing.
    #[must_use]
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            inner: StableUnGraph::default(),
            index: HashMap::new(),
            ordered: Vec::new(),
            description: description.into(),
        }
    }

    /// The star graph on `n` vertices: identifiers `"0".."n-1"`, centre `"0"`
    /// joined to every other vertex with weight 1.
    ///
    /// This is the most centralized graph of its size and serves as the
    /// reference for centralization scores.
    #[must_use]
    pub fn star(n: usize) -> Self {
        let mut graph = Self::with_description("star");
        let ids: Vec<VertexId> = (0..n).map(|i| graph.insert_vertex(i.to_string())).collect();
        if let Some((&center, leaves)) = ids.split_first() {
            for &leaf in leaves {
                graph.inner.add_edge(center, leaf, 1.0);
            }
        }
        graph
    }

    /// The description label given at construction.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    // -----------------------------------------------------------------------
    // Vertices
    // -----------------------------------------------------------------------

    /// Add a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if `identifier` is already used.
    pub fn add_vertex(&mut self, identifier: impl Into<String>) -> Result<VertexId, GraphError> {
        let identifier = identifier.into();
        if self.index.contains_key(&identifier) {
            return Err(GraphError::DuplicateVertex(identifier));
        }
        Ok(self.insert_vertex(identifier))
    }

    fn insert_vertex(&mut self, identifier: String) -> VertexId {
        let id = self.inner.add_node(identifier.clone());
        let inner = &self.inner;
        let pos = self
            .ordered
            .partition_point(|&other| inner[other].as_str() < identifier.as_str());
        self.ordered.insert(pos, id);
        self.index.insert(identifier, id);
        id
    }

    /// Look up the handle for an identifier.
    #[must_use]
    pub fn vertex_id(&self, identifier: &str) -> Option<VertexId> {
        self.index.get(identifier).copied()
    }

    /// Whether a vertex with this identifier exists.
    #[must_use]
    pub fn contains_vertex(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// The vertex with this identifier, if any.
    #[must_use]
    pub fn vertex(&self, identifier: &str) -> Option<Vertex<'_>> {
        self.vertex_id(identifier).map(|id| Vertex::new(self, id))
    }

    /// The vertex behind a handle, if the handle is live.
    #[must_use]
    pub fn vertex_by_id(&self, id: VertexId) -> Option<Vertex<'_>> {
        self.inner.contains_node(id).then(|| Vertex::new(self, id))
    }

    /// The identifier behind a handle, if the handle is live.
    #[must_use]
    pub fn identifier(&self, id: VertexId) -> Option<&str> {
        self.inner.node_weight(id).map(String::as_str)
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex<'_>> {
        self.inner.node_indices().map(|id| Vertex::new(self, id))
    }

    /// All vertices sorted by identifier.
    ///
    /// This order is the index space of every matrix view.
    pub fn ordered_vertices(&self) -> impl ExactSizeIterator<Item = Vertex<'_>> {
        self.ordered.iter().map(|&id| Vertex::new(self, id))
    }

    /// Vertex handles sorted by identifier.
    #[must_use]
    pub fn ordered_ids(&self) -> &[VertexId] {
        &self.ordered
    }

    /// Vertex identifiers sorted lexicographically.
    #[must_use]
    pub fn ordered_identifiers(&self) -> Vec<&str> {
        self.ordered
            .iter()
            .map(|&id| self.inner[id].as_str())
            .collect()
    }

    /// Map from vertex handle to its row/column in the matrix views.
    #[must_use]
    pub fn ordered_positions(&self) -> HashMap<VertexId, usize> {
        self.ordered
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect()
    }

    /// Remove a vertex and every incident edge. Returns `false` if absent.
    pub fn remove_vertex(&mut self, identifier: &str) -> bool {
        match self.vertex_id(identifier) {
            Some(id) => self.remove_vertex_by_id(id),
            None => false,
        }
    }

    /// Remove a vertex by handle. Returns `false` if the handle is not live.
    pub fn remove_vertex_by_id(&mut self, id: VertexId) -> bool {
        let Some(identifier) = self.inner.remove_node(id) else {
            return false;
        };
        self.index.remove(&identifier);
        self.ordered.retain(|&other| other != id);
        trace!(vertex = %identifier, "removed vertex");
        true
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Connect two vertices given by identifier.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownVertex`] if either identifier is not a vertex.
    /// - [`GraphError::DuplicateEdge`] if the vertices are already connected.
    /// - [`GraphError::SelfLoop`] if both identifiers are the same.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<EdgeId, GraphError> {
        let (va, vb) = self.resolve_pair(a, b)?;
        self.add_edge_between(va, vb, weight)
    }

    /// Connect two vertices with weight 1.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::add_edge`].
    pub fn add_unit_edge(&mut self, a: &str, b: &str) -> Result<EdgeId, GraphError> {
        self.add_edge(a, b, 1.0)
    }

    /// Connect two vertices given by handle.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::add_edge`].
    pub fn add_edge_between(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
    ) -> Result<EdgeId, GraphError> {
        let name_a = self.handle_name(a)?;
        let name_b = self.handle_name(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(name_a));
        }
        if self.inner.find_edge(a, b).is_some() {
            return Err(GraphError::DuplicateEdge(name_a, name_b));
        }
        Ok(self.inner.add_edge(a, b, weight))
    }

    /// Set the weight between two vertices, creating the edge if needed.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownVertex`] if either identifier is not a vertex.
    /// - [`GraphError::SelfLoop`] if both identifiers are the same.
    pub fn set_weight(&mut self, a: &str, b: &str, weight: f64) -> Result<EdgeId, GraphError> {
        let (va, vb) = self.resolve_pair(a, b)?;
        if let Some(edge) = self.inner.find_edge(va, vb) {
            self.inner[edge] = weight;
            return Ok(edge);
        }
        self.add_edge_between(va, vb, weight)
    }

    /// Remove the edge between two vertices given by identifier.
    ///
    /// Returns the removed weight, or `None` if they were not connected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either identifier is not a vertex.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<Option<f64>, GraphError> {
        let (va, vb) = self.resolve_pair(a, b)?;
        Ok(self.remove_edge_between(va, vb))
    }

    /// Remove the edge between two handles, returning its weight if present.
    pub fn remove_edge_between(&mut self, a: VertexId, b: VertexId) -> Option<f64> {
        let edge = self.inner.find_edge(a, b)?;
        self.inner.remove_edge(edge)
    }

    /// Remove an edge by handle, returning its weight if it was live.
    pub fn remove_edge_by_id(&mut self, edge: EdgeId) -> Option<f64> {
        self.inner.remove_edge(edge)
    }

    /// The edge between two vertices given by identifier.
    ///
    /// `None` when either identifier is unknown or the vertices are not
    /// connected.
    #[must_use]
    pub fn edge(&self, a: &str, b: &str) -> Option<Edge<'_>> {
        self.edge_between(self.vertex_id(a)?, self.vertex_id(b)?)
    }

    /// The edge between two handles, if any.
    #[must_use]
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<Edge<'_>> {
        self.inner
            .find_edge(a, b)
            .and_then(|edge| Edge::new(self, edge))
    }

    /// The edge behind a handle, if the handle is live.
    #[must_use]
    pub fn edge_by_id(&self, edge: EdgeId) -> Option<Edge<'_>> {
        Edge::new(self, edge)
    }

    /// All edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.inner
            .edge_indices()
            .filter_map(|edge| Edge::new(self, edge))
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<(VertexId, VertexId), GraphError> {
        let va = self
            .vertex_id(a)
            .ok_or_else(|| GraphError::UnknownVertex(a.to_owned()))?;
        let vb = self
            .vertex_id(b)
            .ok_or_else(|| GraphError::UnknownVertex(b.to_owned()))?;
        Ok((va, vb))
    }

    fn handle_name(&self, id: VertexId) -> Result<String, GraphError> {
        self.identifier(id)
            .map(str::to_owned)
            .ok_or_else(|| GraphError::UnknownVertex(format!("#{}", id.index())))
    }

    // -----------------------------------------------------------------------
    // Matrix views
    // -----------------------------------------------------------------------

    /// Weighted adjacency matrix in ordered-vertex index space.
    ///
    /// Entries are the edge weight where an edge exists and `+inf` otherwise,
    /// including the diagonal.
    #[must_use]
    pub fn weighted_adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.ordered.len();
        let positions = self.ordered_positions();
        let mut matrix = DMatrix::from_element(n, n, f64::INFINITY);
        for edge in self.inner.edge_indices() {
            let Some((a, b)) = self.inner.edge_endpoints(edge) else {
                continue;
            };
            let (i, j) = (positions[&a], positions[&b]);
            let weight = self.inner[edge];
            matrix[(i, j)] = weight;
            matrix[(j, i)] = weight;
        }
        matrix
    }

    /// Adjacency matrix of the graph treated as unweighted: 1 where connected,
    /// 0 elsewhere.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn unweighted_adjacency_matrix(&self) -> DMatrix<f64> {
        self.weighted_adjacency_matrix()
            .map(|w| if w == f64::INFINITY { 0.0 } else { 1.0 })
    }

    // -----------------------------------------------------------------------
    // Whole-graph queries and transforms
    // -----------------------------------------------------------------------

    /// Whether every vertex is reachable from every other one.
    ///
    /// The empty graph is connected by definition.
    #[must_use]
    #[instrument(skip(self), fields(graph = %self.description, vertices = self.vertex_count()))]
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.ordered.first() else {
            return true;
        };
        let mut bfs = Bfs::new(&self.inner, start);
        let mut visited = 0usize;
        while bfs.next(&self.inner).is_some() {
            visited += 1;
        }
        visited == self.inner.node_count()
    }

    /// Replace every edge weight `w` with `1 / w`.
    ///
    /// Zero weights become `+inf`; nothing is trapped.
    pub fn invert_edge_weights(&mut self) {
        let edges: Vec<EdgeId> = self.inner.edge_indices().collect();
        for edge in edges {
            self.inner[edge] = 1.0 / self.inner[edge];
        }
    }

    /// Divide every edge weight by the current maximum weight.
    ///
    /// A graph without edges is left untouched. A NaN weight makes the
    /// maximum NaN, so every weight becomes NaN.
    pub fn normalize_edge_weights(&mut self) {
        let edges: Vec<EdgeId> = self.inner.edge_indices().collect();
        let max = edges
            .iter()
            .map(|&edge| self.inner[edge])
            .reduce(|max, w| if max.is_nan() || w.is_nan() { f64::NAN } else { max.max(w) })
            .unwrap_or(1.0);
        for edge in edges {
            self.inner[edge] /= max;
        }
    }

    /// BLAKE3 fingerprint of the vertex set and weighted edge set.
    ///
    /// Equal graphs (see [`PartialEq`]) produce equal hashes, so the value can
    /// key caches of derived results.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for &id in &self.ordered {
            hasher.update(self.inner[id].as_bytes());
            hasher.update(b"\x00");
        }
        hasher.update(b"\x01");

        let mut edges: Vec<(&str, &str, u64)> = self
            .edges()
            .map(|edge| {
                let (a, b) = edge.endpoints();
                let (lo, hi) = if a.identifier() <= b.identifier() {
                    (a.identifier(), b.identifier())
                } else {
                    (b.identifier(), a.identifier())
                };
                (lo, hi, edge.weight().to_bits())
            })
            .collect();
        edges.sort_unstable();

        for (lo, hi, bits) in edges {
            hasher.update(lo.as_bytes());
            hasher.update(b"\x00");
            hasher.update(hi.as_bytes());
            hasher.update(b"\x00");
            hasher.update(&bits.to_le_bytes());
        }
        format!("blake3:{}", hasher.finalize())
    }
}

impl PartialEq for Graph {
    /// Same identifiers in the same order, same adjacency, and bit-for-bit
    /// `==` weights. No epsilon is applied.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        if self.ordered.len() != other.ordered.len() || self.edge_count() != other.edge_count() {
            return false;
        }
        let same_vertices = self
            .ordered
            .iter()
            .zip(&other.ordered)
            .all(|(&a, &b)| self.inner[a] == other.inner[b]);
        same_vertices
            && self.edges().all(|edge| {
                let (a, b) = edge.endpoints();
                other
                    .edge(a.identifier(), b.identifier())
                    .is_some_and(|theirs| theirs.weight() == edge.weight())
            })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.description)?;
        for vertex in self.ordered_vertices() {
            let mut neighbors: Vec<&str> = vertex.neighbors().map(Vertex::identifier).collect();
            neighbors.sort_unstable();
            writeln!(f, "{}: [{}]", vertex.identifier(), neighbors.join(", "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
