#![forbid(unsafe_code)]
//! centra-core library.
//!
//! The weighted, undirected graph model that every centra analysis consumes,
//! plus the small amount of linear algebra and graph coloring the analyses
//! lean on.
//!
//! # Conventions
//!
//! - **Errors**: Fallible operations return [`GraphError`].
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Ordering**: Every matrix view is indexed by [`Graph::ordered_ids`], the
//!   vertex sequence sorted lexicographically by identifier.

pub mod coloring;
pub mod error;
pub mod graph;
pub mod linalg;

pub use coloring::{BipartitePartition, bipartite_partition};
pub use error::GraphError;
pub use graph::{AdjacencyMap, Edge, EdgeId, Graph, Vertex, VertexId};
