use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn degseq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_degseq"))
        .args(args)
        .output()
        .expect("run degseq")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

#[test]
fn realize_lists_configurations() {
    let output = degseq(&["realize", "2", "2", "2", "2", "2", "2"]);
    assert!(output.status.success());
    let body = stdout(&output);
    assert!(body.contains("Configuration 1:"));
    assert!(body.contains("Configuration 2:"));
    assert!(body.contains("  edge 0 -- "));
    assert!(body.trim_end().ends_with("Total unique configurations: 2"));
}

#[test]
fn realize_reports_empty_result_for_infeasible_input() {
    let output = degseq(&["realize", "3", "3", "1", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Total unique configurations: 0"));
}

#[test]
fn negative_degrees_are_rejected() {
    let output = degseq(&["realize", "2", "-1", "1"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("negative-degree"), "{err}");
}

#[test]
fn save_writes_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("configs.json");
    let path_arg = path.to_str().unwrap();
    let output = degseq(&[
        "realize",
        "3",
        "3",
        "2",
        "2",
        "1",
        "1",
        "--save",
        "--json-filename",
        path_arg,
        "--dedup",
        "canonical",
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Configurations saved to"));
    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["provenance"]["dedup"], "canonical");
    let configurations = value["configurations"].as_array().unwrap();
    assert!(!configurations.is_empty());
    assert_eq!(value["stats"]["representatives"].as_u64().unwrap() as usize, configurations.len());
}

#[test]
fn save_edges_format_writes_bare_lists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.json");
    let output = degseq(&[
        "realize",
        "1",
        "1",
        "--save",
        "--format",
        "edges",
        "--json-filename",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!([[[0, 1]]]));
}

#[test]
fn config_file_sets_options() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("options.yaml");
    std::fs::write(&config, "strategy: switching\nthreads: 1\n").unwrap();
    let output = degseq(&["realize", "3", "3", "3", "3", "3", "3", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Total unique configurations: 2"));

    let bad = degseq(&["realize", "1", "1", "--strategy", "sideways"]);
    assert!(!bad.status.success());
    let err = String::from_utf8_lossy(&bad.stderr);
    assert!(err.contains("exhaustive") && err.contains("switching"), "{err}");

    let bad = degseq(&["realize", "1", "1", "--oracle", "nauty"]);
    assert!(!bad.status.success());
    let err = String::from_utf8_lossy(&bad.stderr);
    assert!(err.contains("backtrack") && err.contains("permutation"), "{err}");
}

#[test]
fn save_with_many_isolated_nodes_finishes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparse.json");
    let mut args = vec!["realize", "1", "1"];
    args.extend(["0"; 16]);
    args.extend(["--save", "--json-filename", path.to_str().unwrap(), "--dedup", "canonical"]);
    let output = degseq(&args);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Total unique configurations: 1"));
    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["configurations"][0]["labelled_copies"], serde_json::json!(1));
    assert_eq!(value["configurations"][0]["automorphisms"]["orbit_hist"], serde_json::json!([2, 16]));
}

#[test]
fn check_explains_verdict() {
    let yes = degseq(&["check", "3", "3", "3", "2", "1"]);
    assert!(stdout(&yes).contains("is graphical"));
    let no = degseq(&["check", "3", "3", "3", "2", "2"]);
    assert!(stdout(&no).contains("degree sum 13 is odd"));
}

#[test]
fn sample_is_deterministic() {
    let args = ["sample", "3", "3", "2", "2", "1", "1", "--seed", "7", "--count", "3"];
    let first = degseq(&args);
    let second = degseq(&args);
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
    assert!(stdout(&first).contains("Sample 3"));
}

#[test]
fn version_prints_package_version() {
    let output = degseq(&["version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}
