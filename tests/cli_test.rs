//! Exit-code and output contract of the `listexamples` binary.

mod common;

use assert_cmd::Command;
use common::GoPath;

fn listexamples() -> Command {
    let mut cmd = Command::cargo_bin("listexamples").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_path_prints_usage_and_exits_1() {
    let output = listexamples().env_remove("GOPATH").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Incorrect usage:"), "stdout: {stdout}");
}

#[test]
fn test_extra_argument_prints_usage_and_exits_1() {
    let output = listexamples().args(["a", "b"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Incorrect usage:"));
}

#[test]
fn test_invalid_format_value_is_named_and_exits_1() {
    let output = listexamples().args(["--format", "xml", "a"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Incorrect usage:"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("xml"));
}

#[test]
fn test_scan_prints_report() {
    let gopath = GoPath::new();
    gopath.write(
        "acme/demo/demo.go",
        "package demo\n\nfunc Foo() {}\n\nfunc ExampleFoo() {}\n",
    );

    let output = listexamples()
        .current_dir(gopath.root())
        .env("GOPATH", gopath.root())
        .arg(gopath.src().join("acme"))
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Package demo in acme/demo\n\tFoo\n"), "stdout: {stdout}");
    assert!(stdout.contains("\tExampleFoo\n"));
}

#[test]
fn test_relative_path_resolves_against_current_dir() {
    let gopath = GoPath::new();
    gopath.write("acme/demo/demo.go", "package demo\n\nfunc Foo() {}\n");

    let output = listexamples()
        .current_dir(gopath.src())
        .env("GOPATH", gopath.root())
        .args(["--format", "json", "acme/../acme"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["demo in acme/demo"]["Foo"].as_array().unwrap().is_empty());
}

#[test]
fn test_path_outside_gopath_fails_without_report() {
    let gopath = GoPath::new();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = listexamples()
        .current_dir(gopath.root())
        .env("GOPATH", gopath.root())
        .arg(elsewhere.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not in GOPATH"));
}
