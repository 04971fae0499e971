//! Integration tests for the arxlate CLI commands.
//!
//! None of these reach the network: they cover configuration, library editing, identifier
//! checks, and the paths of `batch`/`translate` that stop before downloading.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::{tempdir, TempDir};

// Helper function to create a clean command instance
fn arxlate() -> Command { Command::cargo_bin("arxlate").unwrap() }

// Helper to get a temporary config file and library directory
fn temp_env() -> (TempDir, PathBuf, PathBuf) {
  let dir = tempdir().unwrap();
  let config = dir.path().join("config.toml");
  let library = dir.path().join("library");
  (dir, config, library)
}

fn add_item(config: &Path, library: &Path, args: &[&str]) {
  arxlate()
    .arg("add")
    .args(args)
    .arg("--config")
    .arg(config)
    .arg("--library")
    .arg(library)
    .assert()
    .success();
}

#[test]
#[serial]
fn test_init_writes_config() {
  let (dir, config, library) = temp_env();

  arxlate()
    .arg("init")
    .arg("--config")
    .arg(&config)
    .arg("--library")
    .arg(&library)
    .arg("--service-tag")
    .arg("mirror")
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("Configuration written"));

  let content = std::fs::read_to_string(&config).unwrap();
  assert!(content.contains("service_tag = \"mirror\""));
  assert!(content.contains("{arxiv_id}"));
  dir.close().unwrap();
}

#[test]
#[serial]
fn test_init_rejects_bad_endpoint() {
  let (dir, config, _) = temp_env();

  arxlate()
    .arg("init")
    .arg("--config")
    .arg(&config)
    .arg("--endpoint")
    .arg("https://translate.example/arxiv/")
    .arg("--accept-defaults")
    .assert()
    .failure();

  assert!(!config.exists());
  dir.close().unwrap();
}

#[test]
#[serial]
fn test_add_and_check() {
  let (dir, config, library) = temp_env();

  add_item(&config, &library, &[
    "ARXIV1",
    "--title",
    "Attention Is All You Need",
    "--url",
    "https://doi.org/10.48550/arXiv.1706.03762",
  ]);
  add_item(&config, &library, &["JOURNAL1", "--title", "A journal paper", "--extra", "DOI: 10.1000/xyz123"]);

  let index: serde_json::Value =
    serde_json::from_str(&std::fs::read_to_string(library.join("library.json")).unwrap()).unwrap();
  assert_eq!(index["items"].as_array().unwrap().len(), 2);

  arxlate()
    .arg("check")
    .arg("ARXIV1")
    .arg("JOURNAL1")
    .arg("--config")
    .arg(&config)
    .arg("--library")
    .arg(&library)
    .assert()
    .success()
    .stdout(predicate::str::contains("10.48550/arXiv.1706.03762"))
    .stdout(predicate::str::contains("1706.03762"))
    .stdout(predicate::str::contains("10.1000/xyz123"))
    .stdout(predicate::str::contains("not an arXiv DOI"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_batch_without_eligible_items() {
  let (dir, config, library) = temp_env();
  add_item(&config, &library, &["PLAIN1", "--title", "No identifiers"]);

  arxlate()
    .arg("batch")
    .arg("--config")
    .arg(&config)
    .arg("--library")
    .arg(&library)
    .assert()
    .success()
    .stdout(predicate::str::contains("No selected items have an arXiv DOI").count(1));

  assert!(!library.join("storage").exists());
  dir.close().unwrap();
}

#[test]
#[serial]
fn test_translate_reports_item_failures() {
  let (dir, config, library) = temp_env();
  add_item(&config, &library, &["PLAIN1", "--title", "No identifiers"]);

  arxlate()
    .arg("translate")
    .arg("PLAIN1")
    .arg("--config")
    .arg(&config)
    .arg("--library")
    .arg(&library)
    .assert()
    .success()
    .stdout(predicate::str::contains("No DOI found"))
    .stdout(predicate::str::contains("0 attached"));

  dir.close().unwrap();
}

#[test]
#[serial]
fn test_translate_unknown_key() {
  let (dir, config, library) = temp_env();

  arxlate()
    .arg("translate")
    .arg("MISSING")
    .arg("--config")
    .arg(&config)
    .arg("--library")
    .arg(&library)
    .assert()
    .failure();

  dir.close().unwrap();
}
