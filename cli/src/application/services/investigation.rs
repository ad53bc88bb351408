//! Application service — investigate a CloudWatch alarm with the
//! investigator agent.

use anyhow::Result;
use noop_common::{AgentKind, InvocationRequest};
use tracing::warn;

use crate::application::ports::{AgentRuntime, ProgressReporter};
use crate::application::services::dispatch::dispatch;
use crate::domain::{InvestigationReport, build_prompt, extract_report, format_output, parse_alarm_event};

/// Maximum number of stderr bytes quoted back when the investigator fails.
const STDERR_TAIL: usize = 2000;

/// Parse `event_json`, ask the investigator for a root-cause analysis and
/// turn its answer into an HTML report.
///
/// # Errors
///
/// Returns an error if the event is invalid, the runtime cannot be invoked,
/// or the investigator exits unsuccessfully.
pub async fn investigate_alarm(
    runtime: &impl AgentRuntime,
    reporter: &impl ProgressReporter,
    event_json: &str,
    theme_color: &str,
) -> Result<InvestigationReport> {
    let event = parse_alarm_event(event_json)?;
    let prompt = build_prompt(&event, theme_color);

    reporter.step(&format!("investigating alarm '{}'...", event.alarm_name()));
    let dispatched = dispatch(runtime, InvocationRequest::new(AgentKind::Investigator, prompt)).await?;

    if !dispatched.output.success() {
        let stderr = String::from_utf8_lossy(&dispatched.output.stderr);
        let tail = tail_of(stderr.trim(), STDERR_TAIL);
        warn!(exit_code = dispatched.output.exit_code, "investigator failed");
        anyhow::bail!(
            "investigator exited with code {}: {tail}",
            dispatched.output.exit_code
        );
    }

    let answer = format_output(&dispatched.output.stdout_lossy()).text;
    let report = extract_report(&answer, event.alarm_name());
    reporter.success(&report.subject);
    Ok(report)
}

fn tail_of(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut start = s.len() - max;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}
