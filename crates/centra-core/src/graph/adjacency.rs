//! Adjacency-map interchange: `{"a": {"b": 1.0}, "b": {"a": 1.0}}`.
//!
//! This is the JSON shape analysis requests arrive in. Keys and nested keys
//! are kept in `BTreeMap`s so serialization is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::model::Graph;

/// A graph as a map from vertex identifier to `{neighbor: weight}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyMap(pub BTreeMap<String, BTreeMap<String, f64>>);

impl AdjacencyMap {
    /// Export a graph. Every vertex appears as a key (isolated vertices map to
    /// an empty neighbor map) and every edge appears in both directions.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let mut map: BTreeMap<String, BTreeMap<String, f64>> = graph
            .ordered_identifiers()
            .into_iter()
            .map(|id| (id.to_owned(), BTreeMap::new()))
            .collect();

        for edge in graph.edges() {
            let (a, b) = edge.endpoints();
            let weight = edge.weight();
            if let Some(row) = map.get_mut(a.identifier()) {
                row.insert(b.identifier().to_owned(), weight);
            }
            if let Some(row) = map.get_mut(b.identifier()) {
                row.insert(a.identifier().to_owned(), weight);
            }
        }
        Self(map)
    }

    /// Build a graph described as `description`.
    ///
    /// Every key and every neighbor-only identifier becomes a vertex. Nested
    /// entries are applied with [`Graph::set_weight`] in key order, so when a
    /// map is asymmetric the entry visited last wins.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if a vertex lists itself as a neighbor.
    #[instrument(skip(self), fields(keys = self.0.len()))]
    pub fn to_graph(&self, description: &str) -> Result<Graph, GraphError> {
        let mut graph = Graph::with_description(description);
        for (id, neighbors) in &self.0 {
            if !graph.contains_vertex(id) {
                graph.add_vertex(id.clone())?;
            }
            for neighbor in neighbors.keys() {
                if !graph.contains_vertex(neighbor) {
                    graph.add_vertex(neighbor.clone())?;
                }
            }
        }
        for (id, neighbors) in &self.0 {
            for (neighbor, &weight) in neighbors {
                graph.set_weight(id, neighbor, weight)?;
            }
        }
        Ok(graph)
    }

    /// Number of vertices named as keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map names no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Graph> for AdjacencyMap {
    fn from(graph: &Graph) -> Self {
        Self::from_graph(graph)
    }
}

impl TryFrom<&AdjacencyMap> for Graph {
    type Error = GraphError;

    fn try_from(map: &AdjacencyMap) -> Result<Self, Self::Error> {
        map.to_graph("None")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AdjacencyMap {
        serde_json::from_str(json).expect("valid adjacency json")
    }

    #[test]
    fn builds_graph_from_json() {
        let map = parse(r#"{"a": {"b": 1.0, "c": 2.5}, "b": {"a": 1.0}, "c": {"a": 2.5}}"#);
        let g = map.to_graph("request").expect("graph");
        assert_eq!(g.description(), "request");
        assert_eq!(g.ordered_identifiers(), ["a", "b", "c"]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge("c", "a").map(|e| e.weight()), Some(2.5));
    }

    #[test]
    fn neighbor_only_identifiers_become_vertices() {
        let map = parse(r#"{"a": {"z": 3.0}}"#);
        let g = map.to_graph("x").expect("graph");
        assert!(g.contains_vertex("z"));
        assert_eq!(g.edge("a", "z").map(|e| e.weight()), Some(3.0));
    }

    #[test]
    fn isolated_vertices_survive_export() {
        let mut g = Graph::new();
        g.add_vertex("lonely").expect("add");
        let map = AdjacencyMap::from_graph(&g);
        assert_eq!(map.0.get("lonely"), Some(&BTreeMap::new()));
        assert_eq!(serde_json::to_string(&map).expect("json"), r#"{"lonely":{}}"#);
    }

    #[test]
    fn self_reference_is_rejected() {
        let map = parse(r#"{"a": {"a": 1.0}}"#);
        assert!(matches!(map.to_graph("x"), Err(GraphError::SelfLoop(_))));
    }

    #[test]
    fn symmetric_map_round_trips() {
        let json = r#"{"a":{"b":1.0,"c":0.5},"b":{"a":1.0},"c":{"a":0.5},"d":{}}"#;
        let map = parse(json);
        let back = AdjacencyMap::from_graph(&map.to_graph("x").expect("graph"));
        assert_eq!(back, map);
        assert_eq!(serde_json::to_string(&back).expect("json"), json);
    }
}
