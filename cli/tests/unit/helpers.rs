//! Shared test helpers: exit status and `Output` constructors.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};

use noop_cli::application::ports::RuntimeOutput;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

/// Wait status of a process killed by `signal` (no exit code).
#[cfg(unix)]
pub fn signalled(signal: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(signal)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

pub fn runtime_output(exit_code: i32, stdout: &str) -> RuntimeOutput {
    RuntimeOutput {
        exit_code,
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const ALARM_EVENT: &str = r#"{
    "accountId": "111122223333",
    "time": "2025-08-14T09:12:44.000+0000",
    "region": "us-east-1",
    "alarmData": {
        "alarmName": "checkout-latency",
        "state": {"value": "ALARM", "reason": "Threshold Crossed: 3 datapoints"},
        "previousState": {"value": "OK", "reason": ""},
        "configuration": {
            "description": "p99 latency above 2s",
            "metrics": [{"id": "m1", "metricStat": {"metric": {
                "namespace": "AWS/Lambda", "name": "Duration",
                "dimensions": {"FunctionName": "checkout"}}}}]
        }
    }
}"#;
