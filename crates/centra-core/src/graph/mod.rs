//! Weighted, undirected graph model.
//!
//! # Overview
//!
//! [`Graph`] owns every vertex and edge. Storage is arena-indexed: a
//! [`petgraph`] `StableUnGraph` keeps vertex identifiers and edge weights in
//! flat vectors and hands out integer handles ([`VertexId`], [`EdgeId`]) that
//! stay valid when other elements are removed. [`Vertex`] and [`Edge`] are
//! borrowed views over those handles, so there are no back-reference cycles
//! between vertices and edges.
//!
//! ## Ordered vertices
//!
//! The graph keeps its vertices sorted by identifier at all times. That
//! sequence is the row/column index of every matrix view
//! ([`Graph::weighted_adjacency_matrix`], [`Graph::unweighted_adjacency_matrix`])
//! and of every matrix-based analysis downstream, which keeps results
//! reproducible across calls.
//!
//! ## Interchange
//!
//! ```text
//! "<id1> <id2> <weight>" text  ──reader::read_graph──▶ Graph
//! {"a": {"b": 1.0}} JSON        ──AdjacencyMap::to_graph──▶ Graph
//! Graph ──AdjacencyMap::from_graph──▶ {"a": {"b": 1.0}, "b": {"a": 1.0}}
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use centra_core::Graph;
//!
//! let mut g = Graph::with_description("ring");
//! for id in ["a", "b", "c", "d"] {
//!     g.add_vertex(id)?;
//! }
//! g.add_edge("a", "b", 1.0)?;
//! g.add_edge("b", "c", 1.0)?;
//! g.add_edge("c", "d", 1.0)?;
//! g.set_weight("d", "a", 2.0)?;
//!
//! assert!(g.is_connected());
//! assert_eq!(g.ordered_identifiers(), ["a", "b", "c", "d"]);
//! # Ok::<(), centra_core::GraphError>(())
//! ```

pub mod adjacency;
pub mod model;
pub mod reader;
pub mod view;

// Re-export primary types at module level for convenience.
pub use adjacency::AdjacencyMap;
pub use model::{EdgeId, Graph, VertexId};
pub use reader::{parse_graph, read_graph, read_graph_file};
pub use view::{Edge, Vertex};
