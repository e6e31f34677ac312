//! Exit codes and flag merging of the `pairsum` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn pairsum(args: &[&str], env_flags: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pairsum"));
    cmd.current_dir(std::env::temp_dir())
        .env_remove("PAIRSUM_LOG")
        .env_remove("PAIRSUM_FLAGS")
        .args(["-c", "/nonexistent/pairsum.toml"])
        .args(args);
    if let Some(flags) = env_flags {
        cmd.env("PAIRSUM_FLAGS", flags);
    }
    cmd.output().expect("failed to run pairsum")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_found_pair_exits_zero() {
    let output = pairsum(&["-n", "2,7,11,15", "-t", "9"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "linear: found (0, 1): 2 + 7 = 9\n");
}

#[test]
fn test_no_solution_exits_zero() {
    let output = pairsum(&["-n", "1,2,3", "-t", "100"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "linear: no pair sums to 100\n");
}

#[test]
fn test_usage_errors_exit_two() {
    for args in [
        &["-s", "quantum", "-n", "1,2", "-t", "3"][..],
        &["-t", "3"][..],
        &["-n", "1,2"][..],
        &["-n", "1,x", "-t", "3"][..],
        &["-f", "queries.json", "-t", "3"][..],
    ] {
        let output = pairsum(args, None);
        assert_eq!(output.status.code(), Some(2), "{args:?}");
    }
}

#[test]
fn test_input_errors_exit_one() {
    let output = pairsum(&["-f", "/nonexistent/queries.json"], None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load queries"), "{stderr}");

    let bad = temp_file("pairsum_cli_bad_queries.json", "{\"sequence\": [1, 2]");
    let output = pairsum(&["-f", bad.to_str().unwrap()], None);
    let _ = fs::remove_file(&bad);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_errors_exit_one() {
    let config = temp_file("pairsum_cli_bad_config.toml", "strategy = \"quantum\"\n");
    let output = Command::new(env!("CARGO_BIN_EXE_pairsum"))
        .env_remove("PAIRSUM_FLAGS")
        .args(["-c", config.to_str().unwrap(), "-n", "1,2", "-t", "3"])
        .output()
        .expect("failed to run pairsum");
    let _ = fs::remove_file(&config);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_env_flags_are_merged() {
    let output = pairsum(&["-n", "1,4,0,3", "-t", "4"], Some("-s brute-force"));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "brute-force: found (0, 3): 1 + 3 = 4\n");
}

#[test]
fn test_command_line_overrides_env_flags() {
    let output = pairsum(&["-n", "1,4,0,3", "-t", "4", "-s", "hash"], Some("-s brute-force"));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "linear: found (1, 2): 4 + 0 = 4\n");
}

#[test]
fn test_both_strategies_json_report() {
    let output = pairsum(&["-n", "3,3", "-t", "6", "-s", "both", "--format", "json"], None);
    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report[0]["same_pair"], serde_json::Value::Bool(true));
    assert_eq!(report[0]["linear"]["pair"], serde_json::json!([0, 1]));
}
