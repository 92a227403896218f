use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub is_running: bool,
    #[serde(default)]
    pub started_at: Option<String>,
}

/// A status body together with the server clock read off the response.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub status: StatusResponse,
    pub server_now: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StopResponse {
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TotalResponse {
    #[serde(default)]
    pub total_minutes: f64,
}
