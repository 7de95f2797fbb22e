//! CLI Integration Tests
//!
//! End-to-end checks of the `panorama` binary: config handling and trace
//! replay through the real navigator.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("panorama").expect("Failed to find panorama binary")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const THREE_PANELS: &str = r#"{
  "panels": [
    { "id": "start", "title": "Start", "gradient": "linear-gradient(#fff, #eee)" },
    { "id": "middle", "title": "Middle", "gradient": "linear-gradient(#eee, #ddd)" },
    { "id": "end", "title": "End", "gradient": "linear-gradient(#ddd, #ccc)" }
  ],
  "timing": { "cooldown_ms": 500 }
}"#;

// ============================================================================
// Panels Command Tests
// ============================================================================

#[test]
fn test_panels_from_config() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("panels")
        .assert()
        .success()
        .stdout(predicate::str::contains("Panels (3):"))
        .stdout(predicate::str::contains("#middle"))
        .stdout(predicate::str::contains("linear-gradient(#ddd, #ccc)"));
}

#[test]
fn test_panels_with_palette() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);

    // an explicit config wins over the palette
    cli_cmd()
        .args(["--palette", "dusk", "--config"])
        .arg(&config)
        .arg("panels")
        .assert()
        .success()
        .stdout(predicate::str::contains("Panels (3):"));
}

#[test]
fn test_unknown_palette_rejected() {
    cli_cmd()
        .args(["--palette", "neon", "panels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown palette"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_valid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 3 panels, cooldown 500ms, reveal 100ms"));
}

#[test]
fn test_check_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "dup.json",
        r#"{ "panels": [
            { "id": "a", "title": "A", "gradient": "red" },
            { "id": "a", "title": "B", "gradient": "blue" }
        ] }"#,
    );

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate panel id: a"));
}

#[test]
fn test_check_empty_panels() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "empty.json", r#"{ "panels": [] }"#);

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one panel"));
}

#[test]
fn test_check_missing_file() {
    cli_cmd()
        .args(["--config", "/nonexistent/panorama.json", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

// ============================================================================
// Replay Command Tests
// ============================================================================

#[test]
fn test_replay_debounces_wheel() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);
    let trace = write_file(
        &dir,
        "trace.json",
        r#"[
            { "at_ms": 0,   "event": { "type": "wheel", "delta_y": 120 } },
            { "at_ms": 200, "event": { "type": "wheel", "delta_y": 120 } },
            { "at_ms": 600, "event": { "type": "wheel", "delta_y": 120 } }
        ]"#,
    );

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("t=0 0 -> 1 #middle"))
        .stdout(predicate::str::contains("t=200").not())
        .stdout(predicate::str::contains("t=600 1 -> 2 #end"))
        .stdout(predicate::str::contains("final index=2 fragment=end"));
}

#[test]
fn test_replay_mixed_sources() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);
    let trace = write_file(
        &dir,
        "trace.json",
        r#"[
            { "at_ms": 0,    "event": { "type": "key", "key": "End" } },
            { "at_ms": 100,  "event": { "type": "fragment", "id": "start" } },
            { "at_ms": 1000, "event": { "type": "touch_start", "screen_y": 400 } },
            { "at_ms": 1050, "event": { "type": "touch_end", "screen_y": 300 } },
            { "at_ms": 1100, "event": { "type": "dot", "index": 2 } }
        ]"#,
    );

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("t=0 0 -> 2 #end"))
        .stdout(predicate::str::contains("t=100 2 -> 0 #start"))
        .stdout(predicate::str::contains("t=1050 0 -> 1 #middle"))
        .stdout(predicate::str::contains("t=1100 1 -> 2 #end"))
        .stdout(predicate::str::contains("final index=2 fragment=end"));
}

#[test]
fn test_replay_invalid_trace() {
    let dir = TempDir::new().unwrap();
    let trace = write_file(&dir, "bad.json", r#"[{ "at_ms": 0, "event": { "type": "teleport" } }]"#);

    cli_cmd()
        .arg("replay")
        .arg(&trace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid trace"));
}

#[test]
fn test_replay_from_start_panel() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);
    let trace = write_file(
        &dir,
        "trace.json",
        r#"[{ "at_ms": 0, "event": { "type": "wheel", "delta_y": -120 } }]"#,
    );

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .args(["replay", "--start", "end"])
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("t=0 2 -> 1 #middle"))
        .stdout(predicate::str::contains("final index=1 fragment=middle"));
}

#[test]
fn test_replay_unknown_start_panel() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "site.json", THREE_PANELS);
    let trace = write_file(&dir, "trace.json", "[]");

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .args(["replay", "--start", "lobby"])
        .arg(&trace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown panel: lobby"));
}
