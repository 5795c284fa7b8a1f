//! Integration Tests for a full run
//!
//! Drives the library the way the binary does: load, resolve, log.

use std::fs;

use num_bigint::BigUint;
use prime_cache::report::OutputLog;
use prime_cache::{resolve, Provenance, ResultStore, StoreOrigin};
use tempfile::TempDir;

// == Helper Functions ==

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

struct Workspace {
    _dir: TempDir,
    cache: std::path::PathBuf,
    output: std::path::PathBuf,
}

fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    Workspace {
        cache: dir.path().join("prime_factors_cache.json"),
        output: dir.path().join("prime_factors_output.txt"),
        _dir: dir,
    }
}

fn run(ws: &Workspace, n: u64) -> prime_cache::Outcome {
    let mut store = ResultStore::load(&ws.cache);
    let outcome = resolve(&mut store, &big(n));
    OutputLog::new(&ws.output).append(&outcome).unwrap();
    outcome
}

// == Cache Protocol ==

#[test]
fn test_first_run_calculates_second_run_reads_store() {
    let ws = workspace();

    let first = run(&ws, 360);
    assert_eq!(first.provenance, Provenance::Calculated);
    assert_eq!(first.factors, vec![big(2), big(3), big(5)]);

    let second = run(&ws, 360);
    assert_eq!(second.provenance, Provenance::FromStore);
    assert_eq!(second.factors, first.factors);
    assert_eq!(
        second.original_calculation_time,
        Some(first.duration.as_secs_f64())
    );
}

#[test]
fn test_store_accumulates_across_runs() {
    let ws = workspace();

    run(&ws, 2);
    run(&ws, 12);
    run(&ws, 17);

    let store = ResultStore::load(&ws.cache);
    assert_eq!(store.origin(), StoreOrigin::Loaded);
    assert_eq!(store.len(), 3);
    assert_eq!(store.lookup("2").unwrap().factors, vec![big(2)]);
    assert_eq!(store.lookup("12").unwrap().factors, vec![big(2), big(3)]);
    assert_eq!(store.lookup("17").unwrap().factors, vec![big(17)]);
}

#[test]
fn test_persisted_file_matches_expected_shape() {
    let ws = workspace();
    run(&ws, 100);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&ws.cache).unwrap()).unwrap();
    let entry = &value["100"];
    assert_eq!(entry["factors"], serde_json::json!([2, 5]));
    assert!(entry["calculation_time"].is_number());
}

#[test]
fn test_hand_written_store_is_honoured() {
    let ws = workspace();
    fs::write(
        &ws.cache,
        r#"{"100": {"factors": [2, 5], "calculation_time": 0.0001}}"#,
    )
    .unwrap();

    let outcome = run(&ws, 100);
    assert_eq!(outcome.provenance, Provenance::FromStore);
    assert_eq!(outcome.factors, vec![big(2), big(5)]);
    assert_eq!(outcome.original_calculation_time, Some(0.0001));
}

// == Recovery ==

#[test]
fn test_corrupt_store_is_replaced() {
    let ws = workspace();
    fs::write(&ws.cache, "not json at all").unwrap();

    let store = ResultStore::load(&ws.cache);
    assert_eq!(store.origin(), StoreOrigin::Corrupt);
    assert!(store.is_empty());

    let outcome = run(&ws, 9);
    assert_eq!(outcome.provenance, Provenance::Calculated);
    assert!(outcome.persisted);

    let repaired = ResultStore::load(&ws.cache);
    assert_eq!(repaired.origin(), StoreOrigin::Loaded);
    assert_eq!(repaired.lookup("9").unwrap().factors, vec![big(3)]);
}

#[test]
fn test_unwritable_log_does_not_lose_result() {
    let ws = workspace();
    fs::create_dir(&ws.output).unwrap();

    let mut store = ResultStore::load(&ws.cache);
    let outcome = resolve(&mut store, &big(12));

    assert!(OutputLog::new(&ws.output).append(&outcome).is_err());
    assert_eq!(outcome.factors, vec![big(2), big(3)]);
    assert!(ResultStore::load(&ws.cache).lookup("12").is_some());
}

// == Output Log ==

#[test]
fn test_output_log_blocks_across_runs() {
    let ws = workspace();

    run(&ws, 12);
    run(&ws, 12);

    let content = fs::read_to_string(&ws.output).unwrap();
    assert!(content.starts_with("--- Run at "));

    let blocks: Vec<&str> = content.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);

    let first: Vec<&str> = blocks[0].lines().collect();
    assert_eq!(first[1], "Prime Factors of number 12 are");
    assert_eq!(first[2], "2, 3");
    assert!(first[3].starts_with("It took "));
    assert!(first[3].ends_with(" seconds to calculate them"));

    let second: Vec<&str> = blocks[1].lines().collect();
    assert!(second[3].ends_with(" seconds to get them from database"));
}
