use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn stdout_of(args: &[&str]) -> String {
    let exe = assert_cmd::cargo_bin!("pathlang-cli");
    let output = Command::new(exe)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn cli_prints_svg_path_data_for_a_fixture() {
    let fixture = repo_root()
        .join("fixtures")
        .join("paths")
        .join("rectangle.path");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let out = stdout_of(&["svg", fixture.to_string_lossy().as_ref()]);
    assert_eq!(out, "M0,0 L20,0 L20,10 L0,10 Z\n");
}

#[test]
fn cli_parse_prints_geometry_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("line.path");
    fs::write(&input, "F0 M 0 0 L 1 1\n").expect("write input");

    let out = stdout_of(&["parse", input.to_string_lossy().as_ref()]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["fillRule"], "evenOdd");
    assert_eq!(value["figures"][0]["segments"][0]["type"], "line");
    assert_eq!(value["figures"][0]["closed"], false);
}

#[test]
fn cli_elements_lists_the_synthesized_fill_rule() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("line.path");
    fs::write(&input, "M 0 0 L 1 1 2 2").expect("write input");

    let out = stdout_of(&["elements", "--pretty", input.to_string_lossy().as_ref()]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    let kinds: Vec<_> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["kind"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        kinds,
        ["fillRule", "moveTo", "line", "line", "closePath"].map(String::from)
    );
}

#[test]
fn cli_trace_reads_stdin() {
    let exe = assert_cmd::cargo_bin!("pathlang-cli");
    let output = assert_cmd::Command::new(exe)
        .arg("trace")
        .write_stdin("M 0 0 l 2 3 z")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        String::from_utf8(output).expect("utf-8 stdout"),
        "set_fill_rule(nonzero)\nbegin_figure(0, 0)\nadd_line(2, 3)\nend_figure(closed)\n"
    );
}

#[test]
fn cli_svg_element_carries_the_fill_rule() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("tri.path");
    fs::write(&input, "F0 M 0 0 L 4 0 L 2 3 Z").expect("write input");

    let out = stdout_of(&["svg", "--element", input.to_string_lossy().as_ref()]);
    assert_eq!(
        out,
        "<path d=\"M0,0 L4,0 L2,3 Z\" fill-rule=\"evenodd\"/>\n"
    );
}

#[test]
fn cli_reports_invalid_paths_with_exit_code_1() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("bad.path");
    fs::write(&input, "M 0,0 X 1,1").expect("write input");

    let exe = assert_cmd::cargo_bin!("pathlang-cli");
    let output = Command::new(exe)
        .arg(input.to_string_lossy().as_ref())
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).expect("utf-8 stderr");
    assert!(stderr.contains("Path validation failed"), "{stderr}");
}

#[test]
fn cli_lenient_flag_accepts_out_of_range_numbers() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("huge.path");
    fs::write(&input, "M 1e999 0 L 1 1").expect("write input");

    let exe = assert_cmd::cargo_bin!("pathlang-cli");
    Command::new(exe)
        .args(["svg", input.to_string_lossy().as_ref()])
        .assert()
        .code(1);

    let out = stdout_of(&["svg", "--lenient", input.to_string_lossy().as_ref()]);
    assert_eq!(out, "M0,0 L1,1\n");
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("pathlang-cli");
    Command::new(exe).arg("--bogus").assert().code(2);
}
