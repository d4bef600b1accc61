//! Analysis requests: which centralities to compute and how to prepare
//! weights, bundled into one call that produces a serializable report.
//!
//! # Output
//!
//! [`AnalysisReport`] serializes flat, one key per requested centrality plus
//! an optional `"centralization"` key:
//!
//! ```text
//! {
//!   "closeness": {"a": 1.0, "b": 0.6},
//!   "degree": {"a": 1.0, "b": 0.2},
//!   "centralization": {"closeness": 1.0, "degree": 1.0}
//! }
//! ```

use std::collections::BTreeMap;

use centra_core::Graph;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::centralization::centralization_from_scores;
use crate::error::AnalysisError;
use crate::power::PowerIterationConfig;
use crate::selector::Centrality;

// ---------------------------------------------------------------------------
// Weight preparation
// ---------------------------------------------------------------------------

/// How incoming edge weights are turned into distances.
///
/// Incoming weights are interaction strengths (bigger means closer); the
/// measures read weights as costs. The default inverts and then normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightPolicy {
    /// Replace every weight `w` with `1 / w`.
    pub invert: bool,
    /// Divide every weight by the maximum weight (after inversion).
    pub normalize: bool,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            invert: true,
            normalize: true,
        }
    }
}

impl WeightPolicy {
    /// Leave weights untouched.
    pub const RAW: Self = Self {
        invert: false,
        normalize: false,
    };

    /// Apply the policy in place.
    pub fn apply(self, graph: &mut Graph) {
        if self.invert {
            graph.invert_edge_weights();
        }
        if self.normalize {
            graph.normalize_edge_weights();
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A list of centralities to compute, optionally with centralization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub centralities: Vec<Centrality>,
    #[serde(default)]
    pub centralization: bool,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            centralities: Centrality::ALL.to_vec(),
            centralization: false,
        }
    }
}

impl AnalysisRequest {
    /// Build a request from centrality names (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnsupportedCentrality`] for the first unknown
    /// name.
    pub fn parse<S: AsRef<str>>(names: &[S], centralization: bool) -> Result<Self, AnalysisError> {
        let centralities = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Centrality>, _>>()?;
        Ok(Self {
            centralities,
            centralization,
        })
    }

    /// A copy of `graph` with `policy` applied to its weights.
    #[must_use]
    pub fn prepare(graph: &Graph, policy: WeightPolicy) -> Graph {
        let mut prepared = graph.clone();
        policy.apply(&mut prepared);
        prepared
    }

    /// Compute every requested centrality (and centralization) on `graph`.
    ///
    /// Weights are used as given; call [`AnalysisRequest::prepare`] first to
    /// turn strengths into distances. If any requested measure needs a
    /// connected graph, connectivity is checked before anything runs.
    /// Otherwise the first failing measure aborts the whole request.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::DisconnectedGraph`] naming the first measure that needs
    /// connectivity, else the first error any requested measure returns.
    #[instrument(skip(self, graph, power), fields(graph = %graph.description(), vertices = graph.vertex_count(), requested = self.centralities.len()))]
    pub fn run(&self, graph: &Graph, power: &PowerIterationConfig) -> Result<AnalysisReport, AnalysisError> {
        let needs_connected = self.centralities.iter().find(|c| c.requires_connected());
        if let Some(centrality) = needs_connected.filter(|_| !graph.is_connected()) {
            return Err(AnalysisError::DisconnectedGraph {
                centrality: centrality.as_str(),
            });
        }

        let mut report = AnalysisReport::default();
        let mut centralization = BTreeMap::new();
        let star = self.centralization.then(|| Graph::star(graph.vertex_count()));

        for &centrality in &self.centralities {
            let scores = centrality.compute(graph, power)?;
            if let Some(star) = &star {
                let reference = centrality.compute(star, power)?;
                let value = centralization_from_scores(&scores, &reference)?;
                centralization.insert(centrality.as_str().to_owned(), value);
            }
            report
                .centralities
                .insert(centrality.as_str().to_owned(), scores.into_iter().collect());
        }

        if self.centralization {
            report.centralization = Some(centralization);
        }
        info!(
            centralities = report.centralities.len(),
            centralization = self.centralization,
            "analysis complete"
        );
        Ok(report)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Scores per requested centrality, plus centralization values if requested.
///
/// Maps are ordered so serialized reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub centralities: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centralization: Option<BTreeMap<String, f64>>,
}

impl AnalysisReport {
    /// Scores for one centrality, if it was requested.
    #[must_use]
    pub fn scores(&self, centrality: Centrality) -> Option<&BTreeMap<String, f64>> {
        self.centralities.get(centrality.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph {
        let mut g = Graph::with_description("star");
        for id in ["a", "b", "c", "d"] {
            g.add_vertex(id).expect("add");
        }
        for leaf in ["b", "c", "d"] {
            g.add_edge("a", leaf, 4.0).expect("edge");
        }
        g
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let ok = AnalysisRequest::parse(&["Degree", "harmonic"], true).expect("known");
        assert_eq!(ok.centralities, [Centrality::Degree, Centrality::Harmonic]);
        assert!(ok.centralization);
        assert!(matches!(
            AnalysisRequest::parse(&["degree", "katz"], false),
            Err(AnalysisError::UnsupportedCentrality(name)) if name == "katz"
        ));
    }

    #[test]
    fn default_policy_inverts_then_normalizes() {
        let mut g = star();
        g.set_weight("a", "b", 2.0).expect("weight");
        let prepared = AnalysisRequest::prepare(&g, WeightPolicy::default());
        // 1/2 = 0.5 is the max inverted weight; 1/4 = 0.25 becomes 0.5
        assert_eq!(prepared.edge("a", "b").map(|e| e.weight()), Some(1.0));
        assert_eq!(prepared.edge("a", "c").map(|e| e.weight()), Some(0.5));
        assert_eq!(g.edge("a", "c").map(|e| e.weight()), Some(4.0), "input untouched");

        let raw = AnalysisRequest::prepare(&g, WeightPolicy::RAW);
        assert_eq!(raw, g);
    }

    #[test]
    fn report_serializes_flat() {
        let request = AnalysisRequest::parse(&["degree"], true).expect("known");
        let report = request
            .run(&star(), &PowerIterationConfig::default())
            .expect("run");
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["degree"]["a"], 1.0);
        assert_eq!(json["centralization"]["degree"], 1.0);
    }

    #[test]
    fn centralization_key_is_omitted_when_not_requested() {
        let request = AnalysisRequest::parse(&["harmonic"], false).expect("known");
        let report = request
            .run(&star(), &PowerIterationConfig::default())
            .expect("run");
        assert!(report.centralization.is_none());
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(!json.contains("centralization"));
        assert!(report.scores(Centrality::Harmonic).is_some());
    }

    #[test]
    fn run_centralization_matches_standalone() {
        let mut g = star();
        g.add_vertex("e").expect("add");
        g.add_edge("b", "e", 1.0).expect("edge");
        let power = PowerIterationConfig::with_iterations(1e-10, 10_000);
        let request =
            AnalysisRequest::parse(&["closeness", "betweenness", "degree"], true).expect("known");
        let report = request.run(&g, &power).expect("run");
        let values = report.centralization.expect("requested");
        for centrality in &request.centralities {
            let standalone = centrality.centralization(&g, &power).expect("standalone");
            let from_run = values[centrality.as_str()];
            assert!(
                (from_run - standalone).abs() < 1e-12,
                "{centrality}: {from_run} vs {standalone}"
            );
        }
    }

    #[test]
    fn first_error_aborts() {
        let mut g = star();
        g.add_vertex("island").expect("add");
        let request = AnalysisRequest::parse(&["degree", "closeness"], false).expect("known");
        assert!(matches!(
            request.run(&g, &PowerIterationConfig::default()),
            Err(AnalysisError::DisconnectedGraph { centrality: "closeness" })
        ));
    }

    #[test]
    fn disconnected_graph_fails_before_any_measure_runs() {
        // Edgeless: eigenvector alone would fail with a zero vector.
        let mut g = Graph::new();
        g.add_vertex("a").expect("add");
        g.add_vertex("b").expect("add");
        let request =
            AnalysisRequest::parse(&["eigenvector", "betweenness", "closeness"], false).expect("known");
        assert!(matches!(
            request.run(&g, &PowerIterationConfig::default()),
            Err(AnalysisError::DisconnectedGraph { centrality: "betweenness" })
        ));
    }

    #[test]
    fn default_request_covers_everything() {
        let request = AnalysisRequest::default();
        assert_eq!(request.centralities.len(), 6);
        let power = PowerIterationConfig::with_iterations(1e-8, 1_000);
        let report = request.run(&star(), &power).expect("run");
        assert_eq!(report.centralities.len(), 6);
    }
}
