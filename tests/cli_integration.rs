// CLI integration tests for the variant binaries and the `keygate` front end.
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

const LEVEL2_KEY: &str = "00101108097098101114101";
const LEVEL3_KEY: &str = "42042042042042042042042";

fn run_with_stdin(exe: &str, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    {
        let mut input = child.stdin.take().expect("stdin");
        input.write_all(stdin).expect("write stdin");
    }
    child.wait_with_output().expect("output")
}

fn level2(stdin: &[u8]) -> Output {
    run_with_stdin(env!("CARGO_BIN_EXE_level2"), &[], stdin)
}

fn level3(stdin: &[u8]) -> Output {
    run_with_stdin(env!("CARGO_BIN_EXE_level3"), &[], stdin)
}

fn keygate(args: &[&str], stdin: &[u8]) -> Output {
    run_with_stdin(env!("CARGO_BIN_EXE_keygate"), args, stdin)
}

fn stdout_text(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("utf8")
}

#[test]
fn level2_accepts_key() {
    let out = level2(format!("{LEVEL2_KEY}\n").as_bytes());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_text(&out), "Please enter key: Good job.\n");
}

#[test]
fn level2_rejects_wrong_second_character() {
    let out = level2(b"01101108097098101114101\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_text(&out), "Please enter key: Nope.\n");
}

#[test]
fn level2_rejects_single_character() {
    let out = level2(b"0\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout_text(&out).ends_with("Nope.\n"));
}

#[test]
fn level2_stops_decoding_at_embedded_nul() {
    let out = level2(b"0010110897\x00098101114101\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_text(&out), "Please enter key: Nope.\n");
}

#[test]
fn empty_stdin_rejects() {
    for out in [level2(b""), level3(b"")] {
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(stdout_text(&out), "Please enter key: Nope.\n");
    }
}

#[test]
fn level3_accepts_only_asterisks() {
    let out = level3(format!("  {LEVEL3_KEY} extra words\n").as_bytes());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_text(&out), "Please enter key: Good job.\n");

    let out = level3(b"42042042042042042042043\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout_text(&out), "Please enter key: Nope.\n");
}

#[test]
fn accept_is_repeatable_across_processes() {
    for _ in 0..2 {
        assert_eq!(level3(LEVEL3_KEY.as_bytes()).status.code(), Some(0));
    }
}

#[test]
fn keygate_check_matches_variant_binary() {
    let direct = level2(format!("{LEVEL2_KEY}\n").as_bytes());
    let via_cli = keygate(&["check", "level2"], format!("{LEVEL2_KEY}\n").as_bytes());
    assert_eq!(direct.stdout, via_cli.stdout);
    assert_eq!(direct.status.code(), via_cli.status.code());
}

#[test]
fn keygate_decode_reports_json() {
    let out = keygate(&["decode", "level2", "00101108097098101114102"], b"");
    assert_eq!(out.status.code(), Some(1));
    let value: Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["variant"], "level2");
    assert_eq!(value["verdict"], "reject");
    assert_eq!(value["reason"]["code"], "value_mismatch");
    assert_eq!(value["decoded"]["text"], "delaberf");

    let out = keygate(&["decode", "level3", LEVEL3_KEY], b"");
    assert_eq!(out.status.code(), Some(0));
    let value: Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["verdict"], "accept");
    assert_eq!(value["decoded"]["text"], "********");
}

#[test]
fn keygate_key_round_trips_through_check() {
    for variant in ["level2", "level3"] {
        let key = keygate(&["key", variant], b"");
        assert!(key.status.success());
        let key = stdout_text(&key).trim().to_string();
        let out = keygate(&["check", variant], format!("{key}\n").as_bytes());
        assert_eq!(out.status.code(), Some(0), "{variant}");
    }
}

#[test]
fn keygate_usage_error_exit_code() {
    let out = keygate(&["check", "level9"], b"");
    assert_eq!(out.status.code(), Some(2));
    let err: Value = serde_json::from_slice(&out.stderr).expect("json");
    assert_eq!(err["error"]["kind"], "Usage");
}

#[test]
fn keygate_version_is_json_when_piped() {
    let out = keygate(&["version"], b"");
    assert!(out.status.success());
    let value: Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["name"], "keygate");
}
