//! Integration tests for the pipedag CLI.
//!
//! These run the built binary against pipeline documents on disk and on stdin.

use rstest::{fixture, rstest};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const CHAIN: &str = r#"{
    "nodes": [{"id": "1"}, {"id": "2"}, {"id": "3"}],
    "edges": [{"source": "1", "target": "2"}, {"source": "2", "target": "3"}]
}"#;

const CYCLE: &str = r#"{
    "nodes": [{"id": "1"}, {"id": "2"}, {"id": "3"}],
    "edges": [
        {"source": "1", "target": "2"},
        {"source": "2", "target": "3"},
        {"source": "3", "target": "1"}
    ]
}"#;

// ============================================================================
// Helpers
// ============================================================================

fn pipedag() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pipedag"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    pipedag()
        .args(args)
        .output()
        .expect("Failed to execute pipedag")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = pipedag()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pipedag");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait on pipedag")
}

fn write_doc(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("Failed to write pipeline document");
    path.display().to_string()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "pipedag failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pipedag"));
    assert!(stdout.contains("check"));
}

#[rstest]
#[case::chain(CHAIN, 2, true)]
#[case::cycle(CYCLE, 3, false)]
fn test_check_file_json(
    temp_dir: TempDir,
    #[case] body: &str,
    #[case] num_edges: u64,
    #[case] is_dag: bool,
) {
    let path = write_doc(temp_dir.path(), "pipeline.json", body);

    let json = stdout_json(&run(&["check", &path, "--json"]));

    assert_eq!(
        json,
        serde_json::json!({ "num_nodes": 3, "num_edges": num_edges, "is_dag": is_dag })
    );
}

#[rstest]
#[case::chain(CHAIN, 2, "Yes")]
#[case::cycle(CYCLE, 3, "No")]
fn test_check_text_output(
    temp_dir: TempDir,
    #[case] body: &str,
    #[case] num_edges: usize,
    #[case] verdict: &str,
) {
    let path = write_doc(temp_dir.path(), "pipeline.json", body);

    let output = run(&["check", &path]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected =
        format!("Number of Nodes  3\nNumber of Edges  {num_edges}\nIs DAG           {verdict}\n");
    assert_eq!(&*stdout, expected.as_str());
}

#[test]
fn test_check_reads_stdin() {
    let output = run_with_stdin(&["check", "-", "--json"], CHAIN);

    let json = stdout_json(&output);
    assert_eq!(json["is_dag"], true);
}

#[rstest]
fn test_check_missing_file_fails(temp_dir: TempDir) {
    let path = temp_dir.path().join("absent.json");

    let output = run(&["check", &path.display().to_string()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.json"));
}

#[rstest]
fn test_check_node_without_id_fails(temp_dir: TempDir) {
    let path = write_doc(
        temp_dir.path(),
        "bad.json",
        r#"{"nodes": [{"type": "llm"}], "edges": []}"#,
    );

    let output = run(&["check", &path]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid pipeline"));
}
