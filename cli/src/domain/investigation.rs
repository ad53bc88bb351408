//! Alarm investigation — prompt construction and report extraction.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use noop_common::AlarmEvent;

use crate::domain::error::AlarmEventError;

/// Default accent colour for the generated HTML report.
pub const DEFAULT_THEME_COLOR: &str = "#6d28d9";

/// HTML report produced from the investigator's answer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InvestigationReport {
    pub subject: String,
    pub html: String,
}

/// Parse a CloudWatch alarm state-change event.
///
/// # Errors
///
/// Returns `AlarmEventError` if the document is not JSON or lacks a required
/// field.
pub fn parse_alarm_event(input: &str) -> Result<AlarmEvent, AlarmEventError> {
    serde_json::from_str(input).map_err(|e| AlarmEventError(e.to_string()))
}

/// Build the prompt that asks the investigator for a root-cause report.
#[must_use]
pub fn build_prompt(event: &AlarmEvent, theme_color: &str) -> String {
    let data = &event.alarm_data;
    let (metric, dimensions) = match event.primary_metric() {
        Some(m) => (
            format!("{}/{}", m.namespace, m.name),
            serde_json::to_string_pretty(&m.dimensions).unwrap_or_else(|_| m.dimensions.to_string()),
        ),
        None => ("metric math expression".to_string(), "{}".to_string()),
    };

    format!(
        "Investigate this alarm to find the root cause.\n\
         \n\
         Name: {name}\n\
         Description: {description}\n\
         State: {old} \u{2192} {new}\n\
         Reason: {reason}\n\
         Timestamp: {time}\n\
         Region: {region}\n\
         Account: {account}\n\
         Metric: {metric}\n\
         Dimensions: {dimensions}\n\
         \n\
         Ensure that you ONLY output HTML in your response to be sent as an email to the client. \
         Keep the email concise but make it look pretty with sections and tables where necessary. \
         Use '{theme_color}' for the main colour theme.",
        name = data.alarm_name,
        description = event.description(),
        old = data.previous_state.value,
        new = data.state.value,
        reason = data.state.reason,
        time = event.time,
        region = event.region,
        account = event.account_id,
    )
}

/// Turn the investigator's answer into the report body.
///
/// Uses the part between `<html>` and `</html>` when present, otherwise wraps
/// the answer in a heading and paragraph. Newlines, including escaped `\n`
/// sequences, are removed.
#[must_use]
pub fn extract_report(answer: &str, alarm_name: &str) -> InvestigationReport {
    let html = match html_body(answer) {
        Some(body) => body.to_string(),
        None => format!("<h2>Alarm Investigation: {alarm_name}</h2><p>{answer}</p>"),
    };
    let html = html.replace("\\n", "").replace(['\n', '\r'], "");

    InvestigationReport {
        subject: format!("Alarm Investigation: {alarm_name}"),
        html: html.trim().to_string(),
    }
}

fn html_body(answer: &str) -> Option<&str> {
    let start = answer.find("<html>")? + "<html>".len();
    let len = answer[start..].find("</html>")?;
    Some(&answer[start..start + len])
}
