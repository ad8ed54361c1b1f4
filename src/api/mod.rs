mod client;
mod helpers;
mod types;

use async_trait::async_trait;

use crate::error::DashboardError;
use crate::model::{Channel, NewChannel, RunAction, RunStatus};

pub use client::ApiClient;
pub use types::{ChannelEntry, ChannelsResponse, StatsResponse, StatusResponse};

/// HTTP operations the dashboard consumes. Every call is a fresh request.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_status(&self) -> Result<RunStatus, DashboardError>;

    async fn list_channels(&self) -> Result<Vec<Channel>, DashboardError>;

    /// The service decides uniqueness; a duplicate source comes back as
    /// `ServerRejected`.
    async fn add_channel(&self, channel: &NewChannel) -> Result<(), DashboardError>;

    async fn delete_channel(&self, source: &str) -> Result<(), DashboardError>;

    async fn set_run_state(&self, action: RunAction) -> Result<(), DashboardError>;
}
