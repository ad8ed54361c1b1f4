use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::DashboardError;
use crate::model::{Channel, NewChannel, RunAction, RunStatus};

use super::helpers::rejection_message;
use super::types::{AddChannelRequest, ChannelsResponse, StatusResponse};
use super::DashboardApi;

/// reqwest-backed client for the relay service's control API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, DashboardError> {
        let raw = config.api_base_url.trim();
        let base_url = Url::parse(raw)
            .map_err(|err| DashboardError::Config(format!("Invalid api_base_url {raw}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DashboardError::Config(format!(
                "api_base_url {raw} cannot carry a path"
            )));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(DashboardError::Network)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// URL parsing collapses `.` and `..` (even percent-encoded), and an
    /// empty segment turns into a trailing slash, so none of them can name a
    /// single resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DashboardError> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(DashboardError::UnaddressableSource(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T>(&self, segments: &[&str]) -> Result<T, DashboardError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let endpoint = url.path().to_string();
        debug!(%endpoint, "GET");

        let body = read_success_body(&endpoint, self.http.get(url)).await?;
        serde_json::from_slice(&body).map_err(|err| DashboardError::protocol(endpoint, err))
    }

    async fn send_mutation(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<(), DashboardError> {
        debug!(%endpoint, "Sending mutation");
        read_success_body(endpoint, request).await?;
        Ok(())
    }
}

async fn read_success_body(
    endpoint: &str,
    request: RequestBuilder,
) -> Result<Vec<u8>, DashboardError> {
    let response = request.send().await.map_err(DashboardError::Network)?;
    let status = response.status();
    let body = response.bytes().await.map_err(DashboardError::Network)?;

    if !status.is_success() {
        return Err(DashboardError::ServerRejected {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: rejection_message(status, &body),
        });
    }

    Ok(body.to_vec())
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn get_status(&self) -> Result<RunStatus, DashboardError> {
        let response: StatusResponse = self.get_json(&["api", "status"]).await?;
        Ok(RunStatus::from(response))
    }

    async fn list_channels(&self) -> Result<Vec<Channel>, DashboardError> {
        let response: ChannelsResponse = self.get_json(&["api", "channels"]).await?;
        response
            .channels
            .into_iter()
            .map(|entry| Channel::from_entry(entry, "/api/channels"))
            .collect()
    }

    async fn add_channel(&self, channel: &NewChannel) -> Result<(), DashboardError> {
        let url = self.endpoint(&["api", "channels"])?;
        let endpoint = url.path().to_string();
        let keywords = channel.filter_keywords.join(",");
        let body = AddChannelRequest {
            source: &channel.source,
            target: &channel.target,
            filter_keywords: (!keywords.is_empty()).then_some(keywords),
        };
        self.send_mutation(&endpoint, self.http.post(url).json(&body))
            .await
    }

    async fn delete_channel(&self, source: &str) -> Result<(), DashboardError> {
        let url = self.endpoint(&["api", "channels", source])?;
        let endpoint = url.path().to_string();
        self.send_mutation(&endpoint, self.http.delete(url)).await
    }

    async fn set_run_state(&self, action: RunAction) -> Result<(), DashboardError> {
        let url = self.endpoint(&["api", action.as_str()])?;
        let endpoint = url.path().to_string();
        self.send_mutation(&endpoint, self.http.post(url)).await
    }
}
