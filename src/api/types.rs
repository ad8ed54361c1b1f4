use serde::{Deserialize, Serialize};

use crate::model::RunState;

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: RunState,
    pub stats: StatsResponse,
}

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub success_count: u64,
    pub error_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChannelsResponse {
    pub channels: Vec<ChannelEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChannelEntry {
    pub source: String,
    pub target: String,
    pub is_active: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub filter_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddChannelRequest<'a> {
    pub source: &'a str,
    pub target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_keywords: Option<String>,
}

/// Error payload shapes the service is known to use.
#[derive(Debug, Deserialize, Default)]
pub struct RejectionBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
