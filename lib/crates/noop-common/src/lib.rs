pub mod agent;
pub mod alarm;

pub use agent::{AgentKind, InvocationRequest, ParseAgentError, RuntimePayload};
pub use alarm::{AlarmEvent, AlarmMetric};
