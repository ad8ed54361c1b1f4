use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::DashboardApi;
use crate::model::Channel;
use crate::surface::Surface;
use crate::view::{render_channels, Locale, Notice, NoticePlacement};

use super::sequence::{Sequencer, Watermark};
use super::{placement_for, ActionOutcome, RefreshOutcome};

/// Points at one row of one particular render of the channel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    pub generation: u64,
    pub index: usize,
}

/// Owns the cached channel list and the delete bindings of the current rows.
pub struct ChannelListController {
    api: Arc<dyn DashboardApi>,
    surface: Arc<dyn Surface>,
    locale: Locale,
    sequence: Sequencer,
    table: Mutex<ChannelTable>,
}

#[derive(Default)]
struct ChannelTable {
    watermark: Watermark,
    generation: u64,
    channels: Vec<Channel>,
    /// Delete key per row of the current generation.
    bindings: Vec<String>,
}

impl ChannelListController {
    pub fn new(api: Arc<dyn DashboardApi>, surface: Arc<dyn Surface>, locale: Locale) -> Self {
        Self {
            api,
            surface,
            locale,
            sequence: Sequencer::default(),
            table: Mutex::new(ChannelTable::default()),
        }
    }

    /// Fetch the list, rebuild every row and rebind deletes for the new rows.
    pub async fn refresh(&self) -> RefreshOutcome {
        let seq = self.sequence.next();
        debug!(seq, "Refreshing channel list");

        let channels = match self.api.list_channels().await {
            Ok(channels) => channels,
            Err(err) => {
                warn!(seq, error = ?err, "Channel list refresh failed");
                self.surface.show_notice(Notice::from_error(
                    NoticePlacement::Banner,
                    &err,
                    self.locale,
                ));
                return RefreshOutcome::Failed;
            }
        };

        let mut table = self.table.lock().await;
        if !table.watermark.advance(seq) {
            debug!(
                seq,
                applied = table.watermark.applied(),
                "Discarding stale channel list"
            );
            return RefreshOutcome::Stale;
        }

        let rows = render_channels(&channels, self.locale);
        table.generation += 1;
        table.bindings = rows.iter().map(|row| row.delete_key.clone()).collect();
        table.channels = channels;
        self.surface.clear_notice(NoticePlacement::Banner);
        self.surface.show_channels(table.generation, &rows);
        RefreshOutcome::Applied
    }

    /// Channel list from the last applied fetch.
    pub async fn snapshot(&self) -> Vec<Channel> {
        self.table.lock().await.channels.clone()
    }

    pub async fn generation(&self) -> u64 {
        self.table.lock().await.generation
    }

    /// Delete key bound to `handle`, if that row is still on screen.
    pub async fn resolve(&self, handle: RowHandle) -> Option<String> {
        let table = self.table.lock().await;
        if handle.generation != table.generation {
            return None;
        }
        table.bindings.get(handle.index).cloned()
    }

    pub(crate) async fn clear_bindings(&self) {
        let mut table = self.table.lock().await;
        table.bindings.clear();
        // Handles from the cleared render must stop resolving.
        table.generation += 1;
    }

    /// Delete-button handler: confirm, delete, then refresh.
    pub async fn delete_row(&self, handle: RowHandle) -> ActionOutcome {
        let Some(source) = self.resolve(handle).await else {
            debug!(?handle, "Delete requested for a row that is no longer rendered");
            self.surface
                .show_notice(Notice::new(NoticePlacement::ChannelTable, self.locale.stale_row()));
            return ActionOutcome::Ignored;
        };

        if !self
            .surface
            .confirm(&self.locale.confirm_delete(&source))
            .await
        {
            debug!(%source, "Delete declined");
            return ActionOutcome::Declined;
        }

        let outcome = match self.api.delete_channel(&source).await {
            Ok(()) => {
                info!(%source, "Channel deleted");
                self.surface.clear_notice(NoticePlacement::ChannelTable);
                ActionOutcome::Completed
            }
            Err(err) if err.is_not_found() => {
                debug!(%source, "Channel was already gone");
                self.surface.clear_notice(NoticePlacement::ChannelTable);
                ActionOutcome::Completed
            }
            Err(err) => {
                warn!(%source, error = ?err, "Failed to delete channel");
                self.surface.show_notice(Notice::from_error(
                    placement_for(&err, NoticePlacement::ChannelTable),
                    &err,
                    self.locale,
                ));
                ActionOutcome::Failed
            }
        };

        self.refresh().await;
        outcome
    }
}
