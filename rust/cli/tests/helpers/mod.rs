//! Shared helpers for the CLI integration tests.
//!
//! Tests that read configuration must run `#[serial]` and call [`clear_env`]
//! first, since the environment is process-wide.

#![allow(dead_code)]

use serde_json::Value;

pub const CONFIG_VARS: &[&str] = &[
    "TABLESTAKES_CONFIG",
    "TABLESTAKES_STARTING_STACK",
    "TABLESTAKES_SMALL_BLIND",
    "TABLESTAKES_BIG_BLIND",
    "TABLESTAKES_PLAYERS",
    "TABLESTAKES_SEED",
    "TABLESTAKES_ADVISOR",
    "TABLESTAKES_ADVISORY_TIMEOUT_MS",
    "TABLESTAKES_ODD_CHIP_POLICY",
];

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["tablestakes"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = tablestakes_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub fn clear_env() {
    for key in CONFIG_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

pub fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Parse every non-empty line of a JSONL file.
pub fn read_jsonl(path: &std::path::Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).expect("read history");
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("invalid JSON at line {}: {}\n{}", i + 1, e, line))
        })
        .collect()
}

pub fn assert_valid_hand_id(hand_id: &str) {
    let ok = hand_id.len() == 15
        && hand_id.chars().take(8).all(|c| c.is_ascii_digit())
        && &hand_id[8..9] == "-"
        && hand_id.chars().skip(9).all(|c| c.is_ascii_digit());
    assert!(
        ok,
        "invalid hand_id format (expected YYYYMMDD-NNNNNN): {}",
        hand_id
    );
}
