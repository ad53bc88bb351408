// lib/crates/noop-common/src/agent.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The agents the runtime hosts. Closed set: dispatch only ever targets one
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Alarming,
    Discovery,
    Investigator,
    Reporting,
}

impl AgentKind {
    /// Every supported agent, in display order.
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Alarming,
        AgentKind::Discovery,
        AgentKind::Investigator,
        AgentKind::Reporting,
    ];

    /// Identifier used on the command line and in payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Alarming => "alarming",
            AgentKind::Discovery => "discovery",
            AgentKind::Investigator => "investigator",
            AgentKind::Reporting => "reporting",
        }
    }

    /// Name of the agent's project directory under the agents root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        self.as_str()
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            AgentKind::Alarming => "Designs and creates CloudWatch alarms for discovered resources",
            AgentKind::Discovery => "Discovers account resources and summarises monitoring-relevant properties",
            AgentKind::Investigator => "Investigates alarms, finds root causes and suggests remediation",
            AgentKind::Reporting => "Answers questions from discovery results and past investigations",
        }
    }

    /// Comma-separated list of valid identifiers, for error messages.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier did not name a supported agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent '{0}'")]
pub struct ParseAgentError(pub String);

impl FromStr for AgentKind {
    type Err = ParseAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseAgentError(s.to_string()))
    }
}

/// A prompt addressed to one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub agent: AgentKind,
    pub prompt: String,
}

/// Wire payload sent to the agent runtime. The agent is selected by where
/// the runtime is invoked, so only the prompt travels.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimePayload<'a> {
    pub prompt: &'a str,
}

impl InvocationRequest {
    #[must_use]
    pub fn new(agent: AgentKind, prompt: impl Into<String>) -> Self {
        Self {
            agent,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn payload(&self) -> RuntimePayload<'_> {
        RuntimePayload {
            prompt: &self.prompt,
        }
    }

    /// Serialized payload, e.g. `{"prompt":"Hello"}`.
    pub fn payload_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.payload())
    }
}
