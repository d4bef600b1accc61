#![no_main]

use centra_core::{AdjacencyMap, Graph};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(map) = serde_json::from_slice::<AdjacencyMap>(data) else {
        return;
    };
    if let Ok(graph) = map.to_graph("fuzz") {
        let again: Graph = AdjacencyMap::from(&graph)
            .to_graph("fuzz")
            .expect("a map built from a graph converts back");
        assert_eq!(again.vertex_count(), graph.vertex_count());
        assert_eq!(again.edge_count(), graph.edge_count());
    }
});
