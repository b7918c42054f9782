/// run the jslibgen binary against the sample manifest in test_data/
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn manifest_path() -> PathBuf {
    // up one level from jslibgen-cli -> workspace root -> test_data
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("Failed to get parent directory of CARGO_MANIFEST_DIR")
        .join("test_data")
        .join("declarations.json")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jslibgen"))
        .args(args)
        .output()
        .expect("Failed to run jslibgen")
}

#[test]
fn test_generates_into_asset_root() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_path();

    let output = run(&[
        manifest.to_str().unwrap(),
        "--asset-root",
        dir.path().to_str().unwrap(),
        "--debug",
        "false",
    ]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let jslib =
        std::fs::read_to_string(dir.path().join("Generated/JsLib/Bar/Baz/Foo.jslib")).unwrap();
    assert!(jslib.contains("Module.Foo.sayHi(UTF8ToString(name));"));
    assert!(!jslib.contains("console.log"));
    assert!(dir.path().join("Generated/JsLib/Bar/Baz/Foo.jspre").exists());
    assert!(dir.path().join("Generated/JsLib/Analytics.jspre").exists());
}

#[test]
fn test_custom_output_root_and_debug() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_path();

    let output = run(&[
        manifest.to_str().unwrap(),
        "--asset-root",
        dir.path().to_str().unwrap(),
        "--output-root",
        "Plugins/WebGL",
        "--debug",
        "true",
    ]);
    assert!(output.status.success());

    let jslib = std::fs::read_to_string(dir.path().join("Plugins/WebGL/Analytics.jslib")).unwrap();
    assert!(jslib.contains("console.log('Analytics_Track ('+UTF8ToString(eventName)+')');"));
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_path();
    let args = [
        manifest.to_str().unwrap(),
        "--asset-root",
        dir.path().to_str().unwrap(),
        "--json",
    ];

    run(&args);
    let output = run(&args);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON report");
    assert_eq!(report["containers"], 3);
    assert_eq!(report["written"].as_array().unwrap().len(), 0);
    assert_eq!(report["unchanged"].as_array().unwrap().len(), 6);
    assert!(report["failures"].as_array().unwrap().is_empty());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_path();

    let output = run(&[
        manifest.to_str().unwrap(),
        "--asset-root",
        dir.path().to_str().unwrap(),
        "--dry-run",
        "--json",
    ]);
    assert!(output.status.success());

    let artifacts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let artifacts = artifacts.as_array().unwrap();
    assert_eq!(artifacts.len(), 6);
    assert_eq!(
        artifacts[0]["relative_path"],
        "Generated/JsLib/Bar/Baz/Foo.jslib"
    );
    assert!(!dir.path().join("Generated").exists());
}

#[test]
fn test_failed_checkout_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_path();

    let output = run(&[
        manifest.to_str().unwrap(),
        "--asset-root",
        dir.path().to_str().unwrap(),
        "--checkout-cmd",
        "jslibgen-test-missing-vcs edit",
    ]);

    assert!(!output.status.success());
    // folders are created before the checkout, the files are not
    assert!(dir.path().join("Generated/JsLib/Bar/Baz").is_dir());
    assert!(!dir.path().join("Generated/JsLib/Bar/Baz/Foo.jslib").exists());
}

#[test]
fn test_missing_manifest() {
    let output = run(&["does-not-exist.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read manifest"));
}

#[test]
fn test_empty_manifest_warns_once() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("empty.json");
    std::fs::write(&manifest, r#"{ "types": [] }"#).unwrap();

    let output = run(&[
        manifest.to_str().unwrap(),
        "--asset-root",
        dir.path().to_str().unwrap(),
        "-q",
    ]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("no containers tagged for generation").count(), 1);
}
