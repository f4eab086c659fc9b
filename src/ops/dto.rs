use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

#[derive(Debug, Clone, Deserialize)]
pub struct OfflineSyncRequest {
    #[serde(default)]
    pub queue_size: u32,
    /// Negative budgets are accepted and never fit a flush.
    #[serde(default = "default_latency_budget_ms")]
    pub latency_budget_ms: i64,
}

fn default_latency_budget_ms() -> i64 {
    1000
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfflineSyncResult {
    pub flushed: bool,
    pub batches_uploaded: u32,
    pub next_retry_s: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyIntent {
    #[default]
    Export,
    Delete,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrivacyRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub intent: PrivacyIntent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivacyResponse {
    pub message: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryEvent {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub duration_ms: f64,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetryResponse {
    pub accepted: bool,
}
