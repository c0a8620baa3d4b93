//! The fatal extraction path.
//!
//! A wrong-state extractor aborts the process, which no in-process harness
//! can observe. Each scenario re-runs this test binary with a single test
//! selected and an environment variable naming the scenario; the parent
//! checks the exit status and the diagnostic on stderr.

use std::process::Command;

use tola_result::fatal::Diagnostic;
use tola_result::{Err, Ok, Report, Result, UNWRAP_ERR_MESSAGE, UNWRAP_OK_MESSAGE};

const SCENARIO_VAR: &str = "TOLA_RESULT_FATAL_SCENARIO";

#[derive(Clone, Copy, Debug, PartialEq, Report)]
#[repr(u8)]
enum Errc {
    NotFound = 4,
    Timeout = 7,
}

#[allow(dead_code)]
#[derive(Debug, Report)]
#[report(debug)]
struct Span {
    start: usize,
    end: usize,
}

// =============================================================================
// Child side
// =============================================================================

/// Entry point of the child process. A no-op when run normally.
#[test]
fn child_entry() {
    let std::result::Result::Ok(scenario) = std::env::var(SCENARIO_VAR) else {
        return;
    };

    match scenario.as_str() {
        "unwrap" => {
            let r: Result<u32, String> = Err("emergency failure".to_string()).into();
            let _ = r.unwrap();
        }
        "expect" => {
            let r: Result<u32, String> = Err("emergency failure".to_string()).into();
            let _ = r.expect("Testing expect terminated");
        }
        "expect_err" => {
            let r: Result<u32, String> = Ok(42u32).into();
            let _ = r.expect_err("Testing expect_err terminated");
        }
        "expect_err_unit" => {
            let r: Result<(), String> = Ok(()).into();
            let _ = r.expect_err("Testing expect_err terminated");
        }
        "unwrap_err" => {
            let r: Result<u32, String> = Ok(2u32).into();
            let _ = r.unwrap_err();
        }
        "enum_payload" => {
            let r: Result<u32, Errc> = Err(Errc::Timeout).into();
            let _ = r.expect("request failed");
        }
        _ => return,
    }

    // Reaching this point means the extractor returned.
    std::process::exit(0);
}

// =============================================================================
// Parent side
// =============================================================================

fn run_child(scenario: &str) -> (bool, String) {
    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["child_entry", "--exact", "--nocapture", "--test-threads=1"])
        .env(SCENARIO_VAR, scenario)
        .output()
        .expect("spawn child test process");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_unwrap_err_state_terminates() {
    let (success, stderr) = run_child("unwrap");
    assert!(!success, "unwrap on Err must not exit normally");
    assert!(stderr.contains(UNWRAP_ERR_MESSAGE), "stderr: {stderr}");
    assert!(stderr.contains("emergency failure"), "stderr: {stderr}");
}

#[test]
fn test_expect_err_state_terminates() {
    let (success, stderr) = run_child("expect");
    assert!(!success);
    assert!(
        stderr.contains("Testing expect terminated: emergency failure"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_expect_err_on_ok_terminates() {
    let (success, stderr) = run_child("expect_err");
    assert!(!success);
    assert!(stderr.contains("Testing expect_err terminated: 42"), "stderr: {stderr}");
}

#[test]
fn test_expect_err_on_unit_ok_prints_message_only() {
    let (success, stderr) = run_child("expect_err_unit");
    assert!(!success);
    assert!(stderr.contains("Testing expect_err terminated"), "stderr: {stderr}");
    assert!(!stderr.contains("Testing expect_err terminated:"), "stderr: {stderr}");
}

#[test]
fn test_unwrap_err_on_ok_terminates() {
    let (success, stderr) = run_child("unwrap_err");
    assert!(!success);
    assert!(stderr.contains(&format!("{UNWRAP_OK_MESSAGE}: 2")), "stderr: {stderr}");
}

#[test]
fn test_enum_payload_renders_as_integer() {
    let (success, stderr) = run_child("enum_payload");
    assert!(!success);
    assert!(stderr.contains("request failed: 7"), "stderr: {stderr}");
    assert!(!stderr.contains("Timeout"), "stderr: {stderr}");
}

// =============================================================================
// Diagnostic formatting (in process)
// =============================================================================

#[test]
fn test_diagnostic_with_payload() {
    let line = Diagnostic::new("boom", "emergency failure").to_string();
    assert_eq!(line, "boom: emergency failure");
}

#[test]
fn test_diagnostic_with_unit_payload() {
    let line = Diagnostic::new("boom", &()).to_string();
    assert_eq!(line, "boom");
}

#[test]
fn test_diagnostic_renders_enum_as_integer() {
    assert_eq!(Diagnostic::new("e", &Errc::NotFound).to_string(), "e: 4");
    assert_eq!(Diagnostic::new("e", &Errc::Timeout).to_string(), "e: 7");
}

#[test]
fn test_diagnostic_with_debug_report() {
    let span = Span { start: 1, end: 3 };
    assert_eq!(
        Diagnostic::new("bad span", &span).to_string(),
        "bad span: Span { start: 1, end: 3 }"
    );
}

#[test]
fn test_diagnostic_with_nested_result() {
    let inner: Result<u32, Errc> = Err(Errc::NotFound).into();
    assert_eq!(Diagnostic::new("outer", &inner).to_string(), "outer: Err(4)");
}
