//! Centrality selection by name.

use std::fmt;
use std::str::FromStr;

use centra_core::Graph;
use serde::{Deserialize, Serialize};

use crate::centralization::centralization;
use crate::error::AnalysisError;
use crate::metrics;
use crate::power::PowerIterationConfig;
use crate::Scores;

/// The centrality measures an analysis can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Centrality {
    Closeness,
    Betweenness,
    Eigenvector,
    Harmonic,
    Degree,
    WeightedDegree,
}

impl Centrality {
    /// Every measure, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Closeness,
        Self::Betweenness,
        Self::Eigenvector,
        Self::Harmonic,
        Self::Degree,
        Self::WeightedDegree,
    ];

    /// The lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closeness => "closeness",
            Self::Betweenness => "betweenness",
            Self::Eigenvector => "eigenvector",
            Self::Harmonic => "harmonic",
            Self::Degree => "degree",
            Self::WeightedDegree => "weighteddegree",
        }
    }

    /// Whether the measure fails on disconnected graphs.
    #[must_use]
    pub const fn requires_connected(self) -> bool {
        matches!(self, Self::Closeness | Self::Betweenness)
    }

    /// Compute this centrality for every vertex of `graph`.
    ///
    /// `power` is only consulted by [`Centrality::Eigenvector`].
    ///
    /// # Errors
    ///
    /// Whatever the underlying measure returns.
    pub fn compute(self, graph: &Graph, power: &PowerIterationConfig) -> Result<Scores, AnalysisError> {
        match self {
            Self::Closeness => metrics::closeness(graph),
            Self::Betweenness => metrics::betweenness(graph),
            Self::Eigenvector => metrics::eigenvector(graph, power).map(|r| r.scores),
            Self::Harmonic => metrics::harmonic(graph),
            Self::Degree => metrics::degree(graph),
            Self::WeightedDegree => metrics::weighted_degree(graph),
        }
    }

    /// Freeman centralization of `graph` under this measure.
    ///
    /// # Errors
    ///
    /// See [`centralization`].
    pub fn centralization(self, graph: &Graph, power: &PowerIterationConfig) -> Result<f64, AnalysisError> {
        centralization(graph, |g| self.compute(g, power))
    }
}

impl fmt::Display for Centrality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Centrality {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| AnalysisError::UnsupportedCentrality(s.to_owned()))
    }
}
