//! End-to-end tests for the `centra` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const STAR: &str = "4\na\nb\nc\nd\na b 1\na c 1\na d 1\n";
const SQUARE: &str = "4\na\nb\nc\nd\na b 1\nb c 1\nc d 1\nd a 1\n";
const TRIANGLE: &str = "3\na\nb\nc\na b 1\nb c 1\na c 1\n";
const SPLIT: &str = "4\na\nb\nc\nd\na b 1\nc d 1\n";
const PATH: &str = "3\na\nb\nc\na b 1\nb c 2\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// A command isolated from the caller's config and environment.
    fn centra(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("centra"));
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("CENTRA_LOG", "error")
            .env_remove("FORMAT")
            .env_remove("CENTRA_LOG_FORMAT")
            .env_remove("DEBUG");
        cmd
    }
}

fn json_stdout(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

fn json_stderr(cmd: &mut Command) -> Value {
    let out = cmd.assert().failure().get_output().stderr.clone();
    serde_json::from_slice(&out).expect("stderr is JSON")
}

fn approx(value: &Value, expected: f64) {
    let actual = value.as_f64().expect("number");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_degree_on_a_star() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let report = json_stdout(ws.centra().args([
        "analyze",
        arg(&graph),
        "-c",
        "degree",
        "--format",
        "json",
    ]));

    let degree = &report["degree"];
    approx(&degree["a"], 1.0);
    for leaf in ["b", "c", "d"] {
        approx(&degree[leaf], 1.0 / 3.0);
    }
    assert!(report.get("closeness").is_none());
    assert!(report.get("centralization").is_none());
}

#[test]
fn analyze_defaults_to_every_centrality() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let report = json_stdout(ws.centra().args([
        "analyze",
        arg(&graph),
        "--max-iterations",
        "1000",
        "--json",
    ]));

    let keys: Vec<&str> = report
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "betweenness",
            "closeness",
            "degree",
            "eigenvector",
            "harmonic",
            "weighteddegree"
        ]
    );
    approx(&report["betweenness"]["a"], 1.0);
    approx(&report["closeness"]["a"], 1.0);
}

#[test]
fn star_centralization_is_maximal() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let report = json_stdout(ws.centra().args([
        "analyze",
        arg(&graph),
        "-c",
        "degree",
        "-c",
        "closeness",
        "--centralization",
        "--format",
        "json",
    ]));

    approx(&report["centralization"]["degree"], 1.0);
    approx(&report["centralization"]["closeness"], 1.0);
}

#[test]
fn analyze_reads_adjacency_json() {
    let ws = Workspace::new();
    let graph = ws.file(
        "pair.json",
        r#"{"a": {"b": 2.0, "c": 4.0}, "b": {"a": 2.0}, "c": {"a": 4.0}}"#,
    );
    let report = json_stdout(ws.centra().args([
        "analyze",
        arg(&graph),
        "-c",
        "weighteddegree",
        "--no-invert",
        "--format",
        "json",
    ]));

    // Normalized weights a-b 0.5, a-c 1.0; strengths a = 3, b = 2, c = 1.
    approx(&report["weighteddegree"]["a"], 1.0);
    approx(&report["weighteddegree"]["b"], 2.0 / 3.0);
    approx(&report["weighteddegree"]["c"], 1.0 / 3.0);
}

#[test]
fn analyze_text_rows() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    ws.centra()
        .args(["analyze", arg(&graph), "-c", "degree", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("degree\ta\t1\n"));
}

#[test]
fn disconnected_closeness_fails_with_code() {
    let ws = Workspace::new();
    let graph = ws.file("split.graph", SPLIT);
    let err = json_stderr(ws.centra().args([
        "analyze",
        arg(&graph),
        "-c",
        "closeness",
        "--format",
        "json",
    ]));

    assert_eq!(err["error"]["error_code"], "E4001");
    assert!(
        err["error"]["message"]
            .as_str()
            .expect("message")
            .contains("closeness")
    );
    assert!(err["error"]["suggestion"].is_string());
}

#[test]
fn unknown_centrality_fails_with_code() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let err = json_stderr(ws.centra().args([
        "analyze",
        arg(&graph),
        "-c",
        "katz",
        "--format",
        "json",
    ]));
    assert_eq!(err["error"]["error_code"], "E4002");
}

#[test]
fn harmonic_accepts_unconnected_graphs() {
    let ws = Workspace::new();
    let graph = ws.file("split.graph", SPLIT);
    let report = json_stdout(ws.centra().args([
        "analyze",
        arg(&graph),
        "-c",
        "harmonic",
        "--format",
        "json",
    ]));
    approx(&report["harmonic"]["a"], 1.0 / 3.0);
}

#[test]
fn malformed_graph_names_file_and_line() {
    let ws = Workspace::new();
    let graph = ws.file("broken.graph", "2\na\nb\na b heavy\n");
    ws.centra()
        .args(["analyze", arg(&graph), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.graph"))
        .stderr(predicate::str::contains("line 4"));
}

#[test]
fn missing_graph_file_fails() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("nope.graph");
    ws.centra()
        .args(["info", arg(&missing), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

// ---------------------------------------------------------------------------
// flow, partition, info
// ---------------------------------------------------------------------------

#[test]
fn flow_prints_all_pairs_distances() {
    let ws = Workspace::new();
    let graph = ws.file("path.graph", PATH);
    let map = json_stdout(ws.centra().args(["flow", arg(&graph), "--format", "json"]));

    approx(&map["a"]["b"], 1.0);
    approx(&map["a"]["c"], 3.0);
    approx(&map["c"]["a"], 3.0);
    approx(&map["b"]["c"], 2.0);
}

#[test]
fn partition_of_even_and_odd_cycles() {
    let ws = Workspace::new();
    let square = ws.file("square.graph", SQUARE);
    let report = json_stdout(ws.centra().args(["partition", arg(&square), "--format", "json"]));
    assert_eq!(report["bipartite"], true);
    assert_eq!(report["blue"], serde_json::json!(["a", "c"]));
    assert_eq!(report["red"], serde_json::json!(["b", "d"]));

    let triangle = ws.file("triangle.graph", TRIANGLE);
    ws.centra()
        .args(["partition", arg(&triangle), "--format", "text"])
        .assert()
        .success()
        .stdout("not bipartite\n");
}

#[test]
fn info_reports_hash_and_connectivity() {
    let ws = Workspace::new();
    let text = ws.file("square.graph", SQUARE);
    let json = ws.file(
        "square.json",
        r#"{"a": {"b": 1, "d": 1}, "b": {"a": 1, "c": 1}, "c": {"b": 1, "d": 1}, "d": {"a": 1, "c": 1}}"#,
    );

    let from_text = json_stdout(ws.centra().args(["info", arg(&text), "--format", "json"]));
    let from_json = json_stdout(ws.centra().args(["info", arg(&json), "--format", "json"]));

    assert_eq!(from_text["vertices"], 4);
    assert_eq!(from_text["edges"], 4);
    assert_eq!(from_text["connected"], true);
    assert_eq!(from_text["description"], "square");
    assert!(
        from_text["content_hash"]
            .as_str()
            .expect("hash")
            .starts_with("blake3:")
    );
    assert_eq!(from_text["content_hash"], from_json["content_hash"]);
}

// ---------------------------------------------------------------------------
// configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_sets_output_format() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let config = ws.file("centra.toml", "[output]\nformat = \"json\"\n");
    let info = json_stdout(ws.centra().args(["--config", arg(&config), "info", arg(&graph)]));
    assert_eq!(info["vertices"], 4);
}

#[test]
fn user_config_is_picked_up() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    std::fs::create_dir_all(ws.dir.path().join("config/centra")).expect("mkdir");
    ws.file("config/centra/config.toml", "[output]\nformat = \"json\"\n");
    let info = json_stdout(ws.centra().args(["info", arg(&graph)]));
    assert_eq!(info["edges"], 3);
}

#[test]
fn format_flag_beats_config() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let config = ws.file("centra.toml", "[output]\nformat = \"json\"\n");
    ws.centra()
        .args(["--config", arg(&config), "info", arg(&graph), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("description\tstar\n"));
}

#[test]
fn invalid_config_is_reported() {
    let ws = Workspace::new();
    let graph = ws.file("star.graph", STAR);
    let config = ws.file("bad.toml", "[weights]\ninvert = \"sometimes\"\n");
    ws.centra()
        .args(["--config", arg(&config), "info", arg(&graph), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
