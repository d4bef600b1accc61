//! Graph model properties and interchange round trips.
//!
//! Random graphs are generated as a vertex count plus a list of index pairs
//! with weights; duplicate pairs and self pairs are filtered out while
//! building.

use proptest::prelude::*;

use centra_core::linalg;
use centra_core::{AdjacencyMap, Graph, bipartite_partition};

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn build(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
    let mut g = Graph::with_description("generated");
    for i in 0..n {
        g.add_vertex(format!("v{i}")).expect("fresh id");
    }
    for &(a, b, w) in edges {
        let (a, b) = (format!("v{}", a % n), format!("v{}", b % n));
        if a != b && g.edge(&a, &b).is_none() {
            g.add_edge(&a, &b, w).expect("new edge");
        }
    }
    g
}

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0.5f64..100.0), 0..(n * 3))
            .prop_map(move |edges| build(n, &edges))
    })
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn invert_twice_is_identity(g in arb_graph()) {
        let mut twice = g.clone();
        twice.invert_edge_weights();
        twice.invert_edge_weights();
        for edge in g.edges() {
            let (a, b) = edge.endpoints();
            let back = twice.edge(a.identifier(), b.identifier()).map(|e| e.weight());
            prop_assert!(back.is_some());
            let back = back.unwrap_or_default();
            prop_assert!((back - edge.weight()).abs() <= 1e-9 * edge.weight());
        }
    }

    #[test]
    fn normalized_max_weight_is_one(g in arb_graph()) {
        prop_assume!(g.edge_count() > 0);
        let mut g = g;
        g.normalize_edge_weights();
        let max = g.edges().map(|e| e.weight()).fold(0.0, f64::max);
        prop_assert!((max - 1.0).abs() < 1e-12);
        prop_assert!(g.edges().all(|e| e.weight() > 0.0 && e.weight() <= 1.0));
    }

    #[test]
    fn adjacency_map_round_trip(g in arb_graph()) {
        let map = AdjacencyMap::from_graph(&g);
        let rebuilt = map.to_graph("rebuilt").expect("valid map");
        prop_assert_eq!(&rebuilt, &g);
        prop_assert_eq!(AdjacencyMap::from_graph(&rebuilt), map);
    }

    #[test]
    fn adjacency_json_round_trip(g in arb_graph()) {
        let json = serde_json::to_string(&AdjacencyMap::from_graph(&g)).expect("serialize");
        let map: AdjacencyMap = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(map.to_graph("json").expect("graph"), g);
    }

    #[test]
    fn weighted_matrix_is_symmetric(g in arb_graph()) {
        let m = g.weighted_adjacency_matrix();
        prop_assert_eq!(&m, &linalg::transpose(&m));
        for i in 0..m.nrows() {
            prop_assert!(m[(i, i)].is_infinite());
        }
    }

    #[test]
    fn ordered_identifiers_stay_sorted(g in arb_graph(), victim in 0usize..12) {
        let mut g = g;
        g.remove_vertex(&format!("v{victim}"));
        let ids = g.ordered_identifiers();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(ids.len(), g.vertex_count());
    }

    #[test]
    fn bipartite_sides_are_proper(g in arb_graph()) {
        if let Some(p) = bipartite_partition(&g) {
            prop_assert_eq!(p.blue.len() + p.red.len(), g.vertex_count());
            for edge in g.edges() {
                let (a, b) = edge.endpoints();
                let a_blue = p.blue.contains(a.identifier());
                let b_blue = p.blue.contains(b.identifier());
                prop_assert_ne!(a_blue, b_blue);
            }
        }
    }

    #[test]
    fn content_hash_matches_equality(g in arb_graph()) {
        let copy = AdjacencyMap::from_graph(&g).to_graph("copy").expect("graph");
        prop_assert_eq!(g.content_hash(), copy.content_hash());
    }
}

// ---------------------------------------------------------------------------
// Fixed cases
// ---------------------------------------------------------------------------

#[test]
fn text_and_json_describe_the_same_graph() {
    let text = "# square\n4\na\nb\nc\nd\na b 1\nb c 1\nc d 1\nd a 2\n";
    let from_text = centra_core::graph::parse_graph(text, "square").expect("text");
    let json = r#"{"a":{"b":1.0,"d":2.0},"b":{"a":1.0,"c":1.0},"c":{"b":1.0,"d":1.0},"d":{"a":2.0,"c":1.0}}"#;
    let map: AdjacencyMap = serde_json::from_str(json).expect("json");
    assert_eq!(from_text, map.to_graph("square").expect("graph"));
    assert_eq!(serde_json::to_string(&AdjacencyMap::from(&from_text)).expect("ser"), json);
}

#[test]
fn display_shows_every_vertex() {
    let g = Graph::star(3);
    assert_eq!(g.to_string(), "star:\n0: [1, 2]\n1: [0]\n2: [0]\n");
}
