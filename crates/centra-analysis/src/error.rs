//! Error taxonomy for the analysis layer.

use centra_core::GraphError;

/// Errors raised while computing centralities and centralization.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The centrality is only defined on connected graphs.
    #[error("{centrality} centrality is undefined for an unconnected graph")]
    DisconnectedGraph { centrality: &'static str },

    /// The requested centrality name is not one of the known measures.
    #[error("unsupported centrality {0:?}; expected one of closeness, betweenness, eigenvector, harmonic, degree, weighteddegree")]
    UnsupportedCentrality(String),

    /// Centralization needs at least one score to compare.
    #[error("can't compute centralization of an empty score map")]
    EmptyInput,

    /// An error from the graph model or linear algebra.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl AnalysisError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DisconnectedGraph { .. } => "E4001",
            Self::UnsupportedCentrality(_) => "E4002",
            Self::EmptyInput => "E4003",
            Self::Graph(inner) => inner.code(),
        }
    }

    /// Whether the error stems from caller input rather than the environment.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        match self {
            Self::Graph(inner) => inner.is_caller_error(),
            _ => true,
        }
    }
}
