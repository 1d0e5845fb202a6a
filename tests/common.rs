//! Test utilities for verstamp integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Relative manifest path used by the default settings
pub const MANIFEST: &str = "pubspec.yaml";

/// Relative metadata path used by the default settings
pub const METADATA: &str = "assets/version/app_version.json";

/// A Flutter-style manifest with a version line and some nested content
pub fn pubspec(version: &str) -> String {
    format!(
        r#"name: sample_app
description: Sample application
publish_to: none
version: {version}

environment:
  sdk: ">=3.0.0 <4.0.0"

dependencies:
  flutter:
    sdk: flutter
  intl: ^0.19.0

flutter:
  uses-material-design: true
  assets:
    - assets/version/
"#
    )
}

/// Write a manifest and a metadata file at the default locations under `root`
pub fn setup_project(root: &Path, version: &str, metadata: &str) -> (PathBuf, PathBuf) {
    let manifest_path = root.join(MANIFEST);
    let metadata_path = root.join(METADATA);

    fs::write(&manifest_path, pubspec(version)).unwrap();
    fs::create_dir_all(metadata_path.parent().unwrap()).unwrap();
    fs::write(&metadata_path, metadata).unwrap();

    (manifest_path, metadata_path)
}

/// Parse a JSON file into an object map
pub fn read_json_object(path: &Path) -> serde_json::Map<String, serde_json::Value> {
    let content = fs::read_to_string(path).unwrap();
    match serde_json::from_str(&content).unwrap() {
        serde_json::Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}

/// Whether a usable git binary is on PATH
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Turn `root` into a git repository with one empty commit
///
/// Returns the short hash of HEAD.
pub fn init_git_repo(root: &Path) -> String {
    let git = |args: &[&str]| {
        let output = std::process::Command::new("git")
            .args([
                "-c",
                "user.name=verstamp",
                "-c",
                "user.email=verstamp@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(root)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8(output.stdout).unwrap()
    };

    git(&["init", "-q"]);
    git(&["commit", "-q", "--allow-empty", "-m", "initial"]);
    git(&["rev-parse", "--short", "HEAD"]).trim().to_string()
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
