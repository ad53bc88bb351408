//! Validation of `noop invoke` arguments.
//!
//! Pure functions only — runs before anything touches the agent runtime.

use noop_common::{AgentKind, InvocationRequest};

use crate::domain::error::InvokeError;

/// Turn the raw positional arguments into an [`InvocationRequest`].
///
/// Arguments are checked in order: both must be present and non-blank
/// (`Usage`), then the identifier must name a known agent (`UnknownAgent`).
/// The prompt is passed through untrimmed.
///
/// # Errors
///
/// Returns `InvokeError::Usage` or `InvokeError::UnknownAgent`.
pub fn parse_request(
    agent: Option<&str>,
    prompt: Option<&str>,
) -> Result<InvocationRequest, InvokeError> {
    let agent = agent
        .filter(|a| !a.trim().is_empty())
        .ok_or(InvokeError::Usage("agent name is required"))?;
    let prompt = prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or(InvokeError::Usage("prompt is required"))?;

    let kind = agent
        .parse::<AgentKind>()
        .map_err(|e| InvokeError::UnknownAgent {
            name: e.0,
            valid: AgentKind::valid_names(),
        })?;

    Ok(InvocationRequest::new(kind, prompt))
}
