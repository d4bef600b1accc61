//! Error taxonomy for the graph model and its utilities.

use std::io;

/// Errors raised by the graph model, interchange readers, and linear algebra.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A vertex with this identifier is already part of the graph.
    #[error("couldn't add vertex: {0:?} is already used")]
    DuplicateVertex(String),

    /// The two vertices are already connected by an edge.
    #[error("couldn't add edge between {0:?} and {1:?}: that edge already exists")]
    DuplicateEdge(String, String),

    /// An identifier or handle does not name a vertex of this graph.
    #[error("{0:?} is not a vertex of this graph")]
    UnknownVertex(String),

    /// An edge would connect a vertex to itself.
    #[error("couldn't add edge: {0:?} cannot be connected to itself")]
    SelfLoop(String),

    /// Matrix shapes are incompatible for multiplication.
    #[error(
        "dimension mismatch: left is {}x{}, right is {}x{}",
        left.0,
        left.1,
        right.0,
        right.1
    )]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A vector with norm exactly zero cannot be normalized.
    #[error("can't normalize the zero vector")]
    ZeroVector,

    /// A plain-text or JSON graph description could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Reading a graph description failed.
    #[error("graph I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateVertex(_) => "E1001",
            Self::DuplicateEdge(..) => "E1002",
            Self::UnknownVertex(_) => "E1003",
            Self::SelfLoop(_) => "E1004",
            Self::DimensionMismatch { .. } => "E2001",
            Self::ZeroVector => "E2002",
            Self::Parse { .. } => "E3001",
            Self::Io(_) => "E5001",
        }
    }

    /// Whether the error stems from caller input rather than the environment.
    ///
    /// An API layer maps these to "bad request" responses.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
