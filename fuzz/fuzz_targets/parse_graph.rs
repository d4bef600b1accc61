#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(graph) = centra_core::graph::parse_graph(text, "fuzz") {
        let ids = graph.ordered_identifiers();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.len(), graph.vertex_count());
        let _ = graph.content_hash();
    }
});
