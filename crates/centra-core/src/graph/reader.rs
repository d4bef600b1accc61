//! Plain-text graph reader.
//!
//! # Format
//!
//! ```text
//! # comment lines start with '#', blank lines are ignored
//! 3            <- vertex count n
//! a            <- n vertex identifiers, one per line
//! b
//! c
//! a b 1.0      <- then any number of "<id1> <id2> <weight>" edges
//! b c 2
//! ```
//!
//! Edges whose two identifiers are equal are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::graph::model::Graph;

/// Parse a graph from an in-memory string.
///
/// # Errors
///
/// See [`read_graph`].
pub fn parse_graph(text: &str, description: &str) -> Result<Graph, GraphError> {
    read_graph(text.as_bytes(), description)
}

/// Read a graph file; the description is the file stem.
///
/// # Errors
///
/// [`GraphError::Io`] if the file can't be opened, otherwise see [`read_graph`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_graph_file(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let path = path.as_ref();
    let description = path
        .file_stem()
        .map_or_else(|| "None".to_owned(), |s| s.to_string_lossy().into_owned());
    let file = File::open(path)?;
    read_graph(BufReader::new(file), &description)
}

/// Read a graph in the plain-text format from any buffered reader.
///
/// # Errors
///
/// - [`GraphError::Io`] when the reader fails.
/// - [`GraphError::Parse`] (with a 1-based line number) when the count or a
///   weight is not a number, an edge line has fewer than three fields, fewer
///   than `n` vertex lines are present, or an edge names an undeclared vertex.
/// - [`GraphError::DuplicateVertex`] / [`GraphError::DuplicateEdge`] when the
///   file repeats a vertex or edge.
pub fn read_graph<R: BufRead>(reader: R, description: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::with_description(description);
    let mut expected: Option<usize> = None;
    let mut declared = 0usize;
    let mut last_line = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(n) = expected else {
            let n = line.parse::<usize>().map_err(|e| GraphError::Parse {
                line: line_no,
                reason: format!("invalid vertex count {line:?}: {e}"),
            })?;
            expected = Some(n);
            continue;
        };

        if declared < n {
            graph.add_vertex(line)?;
            declared += 1;
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(a), Some(b), Some(w)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(GraphError::Parse {
                line: line_no,
                reason: format!("expected \"<id1> <id2> <weight>\", got {line:?}"),
            });
        };
        if a == b {
            continue;
        }
        let weight = w.parse::<f64>().map_err(|e| GraphError::Parse {
            line: line_no,
            reason: format!("invalid weight {w:?}: {e}"),
        })?;
        for id in [a, b] {
            if !graph.contains_vertex(id) {
                return Err(GraphError::Parse {
                    line: line_no,
                    reason: format!("edge references undeclared vertex {id:?}"),
                });
            }
        }
        graph.add_edge(a, b, weight)?;
    }

    match expected {
        Some(n) if declared < n => Err(GraphError::Parse {
            line: last_line,
            reason: format!("expected {n} vertices, found {declared}"),
        }),
        None => Err(GraphError::Parse {
            line: last_line,
            reason: "missing vertex count".to_owned(),
        }),
        Some(_) => {
            debug!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "read graph"
            );
            Ok(graph)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_vertices_and_edges() {
        let text = "# a triangle\n3\na\nb\nc\n\na b 1\nb c 2.5\nc a 1\n";
        let g = parse_graph(text, "triangle").expect("parse");
        assert_eq!(g.description(), "triangle");
        assert_eq!(g.ordered_identifiers(), ["a", "b", "c"]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge("b", "c").map(|e| e.weight()), Some(2.5));
    }

    #[test]
    fn skips_self_edges() {
        let g = parse_graph("2\na\nb\na a 1\na b 1\n", "x").expect("parse");
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn vertex_only_file_is_valid() {
        let g = parse_graph("2\na\nb\n", "x").expect("parse");
        assert_eq!(g.vertex_count(), 2);
        assert!(!g.is_connected());
    }

    #[test]
    fn bad_count_reports_line() {
        let err = parse_graph("# header\nthree\n", "x").expect_err("bad count");
        assert!(matches!(err, GraphError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn bad_weight_reports_line() {
        let err = parse_graph("2\na\nb\na b heavy\n", "x").expect_err("bad weight");
        assert!(matches!(err, GraphError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn short_edge_line_is_rejected() {
        let err = parse_graph("2\na\nb\na b\n", "x").expect_err("short");
        assert!(matches!(err, GraphError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn undeclared_vertex_is_rejected() {
        let err = parse_graph("2\na\nb\na z 1\n", "x").expect_err("undeclared");
        assert!(err.to_string().contains("undeclared vertex \"z\""), "{err}");
    }

    #[test]
    fn missing_vertices_are_rejected() {
        let err = parse_graph("3\na\nb\n", "x").expect_err("missing");
        assert!(err.to_string().contains("expected 3 vertices, found 2"), "{err}");
        assert!(matches!(parse_graph("# only\n", "x"), Err(GraphError::Parse { .. })));
    }

    #[test]
    fn reads_file_with_stem_description() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pair.graph");
        std::fs::write(&path, "2\nx\ny\nx y 4\n").expect("write");
        let g = read_graph_file(&path).expect("read");
        assert_eq!(g.description(), "pair");
        assert_eq!(g.edge("x", "y").map(|e| e.weight()), Some(4.0));

        let missing = read_graph_file(dir.path().join("nope.graph"));
        assert!(matches!(missing, Err(GraphError::Io(_))));
    }
}
