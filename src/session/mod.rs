//! Dashboard session: the poller, the channel table and the action handlers,
//! created together at startup and torn down together.

mod actions;
mod channels;
mod poller;
mod sequence;


use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::DashboardApi;
use crate::error::DashboardError;
use crate::surface::Surface;
use crate::view::{Locale, NoticePlacement};

pub use actions::Action;
pub use channels::{ChannelListController, RowHandle};
pub use poller::{StatusPoller, POLL_INTERVAL};

/// What happened to a refresh once its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer response was already rendered.
    Stale,
    Failed,
    /// The session was torn down while the request was in flight.
    Closed,
}

/// Result of an operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The operator declined the confirmation; nothing was sent.
    Declined,
    /// Nothing was sent because the input could not be acted on.
    Ignored,
    Failed,
}

pub struct DashboardSession {
    status: Arc<StatusPoller>,
    channels: Arc<ChannelListController>,
    api: Arc<dyn DashboardApi>,
    surface: Arc<dyn Surface>,
    locale: Locale,
    timer: Option<JoinHandle<()>>,
}

impl DashboardSession {
    pub fn new(api: Arc<dyn DashboardApi>, surface: Arc<dyn Surface>, locale: Locale) -> Self {
        Self {
            status: Arc::new(StatusPoller::new(
                Arc::clone(&api),
                Arc::clone(&surface),
                locale,
            )),
            channels: Arc::new(ChannelListController::new(
                Arc::clone(&api),
                Arc::clone(&surface),
                locale,
            )),
            api,
            surface,
            locale,
            timer: None,
        }
    }

    /// Initial fetch of both views, then the recurring status poll.
    /// Calling it again only refreshes; the timer is started once and never
    /// restarted after teardown.
    pub async fn start(&mut self) {
        self.refresh_all().await;
        if self.timer.is_none() && !self.status.is_closed() {
            info!(interval_ms = POLL_INTERVAL.as_millis() as u64, "Starting status poll");
            self.timer = Some(StatusPoller::spawn_timer(Arc::clone(&self.status)));
        }
    }

    pub async fn refresh_all(&self) -> (RefreshOutcome, RefreshOutcome) {
        tokio::join!(self.status.refresh(), self.channels.refresh())
    }

    /// Stop the timer, silence in-flight polls and drop the row bindings.
    pub async fn teardown(&mut self) {
        self.status.close();
        if let Some(timer) = self.timer.take() {
            timer.abort();
            info!("Status poll stopped");
        }
        self.channels.clear_bindings().await;
        debug!("Dashboard session torn down");
    }

    pub fn is_polling(&self) -> bool {
        self.timer
            .as_ref()
            .map(|timer| !timer.is_finished())
            .unwrap_or(false)
    }

    pub fn status(&self) -> &StatusPoller {
        &self.status
    }

    pub fn channels(&self) -> &ChannelListController {
        &self.channels
    }
}

impl Drop for DashboardSession {
    fn drop(&mut self) {
        self.status.close();
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Rejections go next to the control that caused them; transport and decode
/// failures go to the banner.
pub(crate) fn placement_for(err: &DashboardError, inline: NoticePlacement) -> NoticePlacement {
    match err {
        DashboardError::ServerRejected { .. } | DashboardError::UnaddressableSource(_) => inline,
        _ => NoticePlacement::Banner,
    }
}
