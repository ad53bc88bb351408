//! Unit tests for the alarm investigation service.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use noop_cli::application::ports::RuntimeOutput;
use noop_cli::application::services::investigation::investigate_alarm;
use noop_cli::domain::AlarmEventError;
use noop_cli::domain::investigation::DEFAULT_THEME_COLOR;
use noop_common::AgentKind;

use crate::helpers::{ALARM_EVENT, runtime_output};
use crate::mocks::{CannedRuntime, RecordingReporter, UnreachableRuntime};

#[tokio::test]
async fn sends_alarm_prompt_to_investigator() {
    let runtime = CannedRuntime::new(runtime_output(0, "<html><p>ok</p></html>"));
    investigate_alarm(
        &runtime,
        &RecordingReporter::default(),
        ALARM_EVENT,
        DEFAULT_THEME_COLOR,
    )
    .await
    .expect("report");

    let sent = runtime.last.borrow().clone().expect("request");
    assert_eq!(sent.agent, AgentKind::Investigator);
    assert!(sent.prompt.contains("checkout-latency"));
    assert!(sent.prompt.contains("OK \u{2192} ALARM"));
    assert!(sent.prompt.contains("AWS/Lambda/Duration"));
}

#[tokio::test]
async fn structured_answer_with_html_becomes_report() {
    let answer = r#"{"result": "Findings:\n<html>\n<h1>Cold starts</h1>\n<p>Raise memory.</p>\n</html>"}"#;
    let runtime = CannedRuntime::new(runtime_output(0, answer));
    let reporter = RecordingReporter::default();

    let report = investigate_alarm(&runtime, &reporter, ALARM_EVENT, "#112233")
        .await
        .expect("report");

    assert_eq!(report.subject, "Alarm Investigation: checkout-latency");
    assert_eq!(report.html, "<h1>Cold starts</h1><p>Raise memory.</p>");
    assert!(
        reporter
            .messages
            .borrow()
            .contains(&"success: Alarm Investigation: checkout-latency".to_string())
    );
}

#[tokio::test]
async fn plain_answer_is_wrapped() {
    let runtime = CannedRuntime::new(runtime_output(0, "Memory exhausted."));
    let report = investigate_alarm(
        &runtime,
        &RecordingReporter::default(),
        ALARM_EVENT,
        DEFAULT_THEME_COLOR,
    )
    .await
    .expect("report");
    assert_eq!(
        report.html,
        "<h2>Alarm Investigation: checkout-latency</h2><p>Memory exhausted.</p>"
    );
}

#[tokio::test]
async fn failing_investigator_reports_exit_code_and_stderr() {
    let runtime = CannedRuntime::new(RuntimeOutput {
        exit_code: 4,
        stdout: Vec::new(),
        stderr: b"AccessDenied: bedrock:InvokeModel".to_vec(),
    });
    let err = investigate_alarm(
        &runtime,
        &RecordingReporter::default(),
        ALARM_EVENT,
        DEFAULT_THEME_COLOR,
    )
    .await
    .expect_err("failure");
    let msg = err.to_string();
    assert!(msg.contains("exited with code 4"), "got: {msg}");
    assert!(msg.contains("AccessDenied"), "got: {msg}");
}

#[tokio::test]
async fn invalid_event_never_reaches_runtime() {
    let runtime = CannedRuntime::new(runtime_output(0, "unused"));
    let err = investigate_alarm(
        &runtime,
        &RecordingReporter::default(),
        r#"{"detail": "not an alarm"}"#,
        DEFAULT_THEME_COLOR,
    )
    .await
    .expect_err("invalid");
    assert!(err.downcast_ref::<AlarmEventError>().is_some());
    assert_eq!(runtime.calls.get(), 0);
}

#[tokio::test]
async fn unreachable_runtime_propagates() {
    let err = investigate_alarm(
        &UnreachableRuntime,
        &RecordingReporter::default(),
        ALARM_EVENT,
        DEFAULT_THEME_COLOR,
    )
    .await
    .expect_err("unreachable");
    assert!(err.to_string().contains("runtime invocation failed"));
}
