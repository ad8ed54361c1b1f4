use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::api::DashboardApi;
use crate::model::{RunState, RunStatus};
use crate::surface::Surface;
use crate::view::{render_status, Locale, Notice, NoticePlacement};

use super::sequence::{Sequencer, Watermark};
use super::RefreshOutcome;

/// Fixed polling period for the status view.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Keeps the status indicator, toggle button and chart in step with the service.
pub struct StatusPoller {
    api: Arc<dyn DashboardApi>,
    surface: Arc<dyn Surface>,
    locale: Locale,
    sequence: Sequencer,
    closed: AtomicBool,
    state: Mutex<PollerState>,
}

#[derive(Default)]
struct PollerState {
    watermark: Watermark,
    last_known: Option<RunStatus>,
}

impl StatusPoller {
    pub fn new(api: Arc<dyn DashboardApi>, surface: Arc<dyn Surface>, locale: Locale) -> Self {
        Self {
            api,
            surface,
            locale,
            sequence: Sequencer::default(),
            closed: AtomicBool::new(false),
            state: Mutex::new(PollerState::default()),
        }
    }

    /// Fetch status and re-render. Failures become a banner; the last
    /// rendered state stays on screen.
    pub async fn refresh(&self) -> RefreshOutcome {
        let seq = self.sequence.next();
        debug!(seq, "Refreshing status");

        let result = self.api.get_status().await;
        if self.is_closed() {
            debug!(seq, "Dropping status response after teardown");
            return RefreshOutcome::Closed;
        }

        let status = match result {
            Ok(status) => status,
            Err(err) => {
                warn!(seq, error = ?err, "Status refresh failed");
                self.surface.show_notice(Notice::from_error(
                    NoticePlacement::Banner,
                    &err,
                    self.locale,
                ));
                return RefreshOutcome::Failed;
            }
        };

        let mut state = self.state.lock().await;
        if !state.watermark.advance(seq) {
            debug!(
                seq,
                applied = state.watermark.applied(),
                "Discarding stale status response"
            );
            return RefreshOutcome::Stale;
        }
        state.last_known = Some(status);
        self.surface.clear_notice(NoticePlacement::Banner);
        self.surface.show_status(&render_status(&status, self.locale));
        RefreshOutcome::Applied
    }

    /// Last status taken from a successful fetch.
    pub async fn last_known(&self) -> Option<RunStatus> {
        self.state.lock().await.last_known
    }

    pub async fn last_known_state(&self) -> Option<RunState> {
        self.last_known().await.map(|status| status.state)
    }

    /// Stop rendering. Responses still in flight are dropped on arrival.
    pub(crate) fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Start the recurring refresh. Each tick spawns its own refresh, so a
    /// slow fetch never delays the next tick. Aborting the returned handle
    /// drops the set and aborts refreshes still in flight.
    pub(crate) fn spawn_timer(poller: Arc<StatusPoller>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + POLL_INTERVAL, POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut in_flight = JoinSet::new();
            loop {
                ticker.tick().await;
                while in_flight.try_join_next().is_some() {}
                let poller = Arc::clone(&poller);
                in_flight.spawn(async move { poller.refresh().await });
            }
        })
    }
}
