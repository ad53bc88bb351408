// lib/crates/noop-common/src/alarm.rs

use serde::{Deserialize, Serialize};

/// CloudWatch alarm state-change event as delivered directly to a Lambda
/// alarm action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmEvent {
    pub alarm_data: AlarmData,
    pub time: String,
    pub region: String,
    pub account_id: String,
    /// ARN of the alarm. Present in real events, absent in hand-written ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_arn: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmData {
    pub alarm_name: String,
    pub state: AlarmState,
    pub previous_state: AlarmState,
    pub configuration: AlarmConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmState {
    pub value: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmConfiguration {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metrics: Vec<MetricQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricQuery {
    #[serde(default)]
    pub id: Option<String>,
    /// Absent for metric-math queries.
    #[serde(default)]
    pub metric_stat: Option<MetricStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricStat {
    pub metric: AlarmMetric,
    #[serde(default)]
    pub period: Option<u64>,
    #[serde(default)]
    pub stat: Option<String>,
}

/// The metric an alarm watches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmMetric {
    pub name: String,
    pub namespace: String,
    #[serde(default = "empty_dimensions")]
    pub dimensions: serde_json::Value,
}

fn empty_dimensions() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl AlarmEvent {
    #[must_use]
    pub fn alarm_name(&self) -> &str {
        &self.alarm_data.alarm_name
    }

    /// Description configured on the alarm, empty when unset.
    #[must_use]
    pub fn description(&self) -> &str {
        self.alarm_data
            .configuration
            .description
            .as_deref()
            .unwrap_or("")
    }

    /// The first metric in the alarm configuration that is a plain metric
    /// stat.
    #[must_use]
    pub fn primary_metric(&self) -> Option<&AlarmMetric> {
        self.alarm_data
            .configuration
            .metrics
            .iter()
            .find_map(|m| m.metric_stat.as_ref())
            .map(|s| &s.metric)
    }
}
