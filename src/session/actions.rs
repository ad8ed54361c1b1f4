use tracing::{debug, info, warn};

use crate::model::NewChannel;
use crate::view::{Notice, NoticePlacement};

use super::{placement_for, ActionOutcome, DashboardSession, RowHandle};

/// Operator input the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleRunState,
    AddChannel(NewChannel),
    DeleteRow(RowHandle),
}

impl DashboardSession {
    pub async fn handle(&self, action: Action) -> ActionOutcome {
        match action {
            Action::ToggleRunState => self.toggle_run_state().await,
            Action::AddChannel(channel) => self.add_channel(channel).await,
            Action::DeleteRow(handle) => self.channels.delete_row(handle).await,
        }
    }

    /// Pause or resume based on the last fetched state, then re-fetch status.
    async fn toggle_run_state(&self) -> ActionOutcome {
        let Some(state) = self.status.last_known_state().await else {
            debug!("Toggle requested before any status was fetched");
            self.surface.show_notice(Notice::new(
                NoticePlacement::Banner,
                self.locale.status_unknown(),
            ));
            return ActionOutcome::Ignored;
        };

        let action = state.toggle_action();
        let outcome = match self.api.set_run_state(action).await {
            Ok(()) => {
                info!(action = action.as_str(), "Run state change requested");
                ActionOutcome::Completed
            }
            Err(err) => {
                warn!(action = action.as_str(), error = ?err, "Run state change failed");
                self.surface.show_notice(Notice::from_error(
                    NoticePlacement::Banner,
                    &err,
                    self.locale,
                ));
                ActionOutcome::Failed
            }
        };

        self.status.refresh().await;
        outcome
    }

    async fn add_channel(&self, channel: NewChannel) -> ActionOutcome {
        if !channel.is_complete() {
            self.surface.show_notice(Notice::new(
                NoticePlacement::AddForm,
                self.locale.missing_fields(),
            ));
            return ActionOutcome::Ignored;
        }

        let outcome = match self.api.add_channel(&channel).await {
            Ok(()) => {
                info!(source = %channel.source, target = %channel.target, "Channel added");
                self.surface.clear_notice(NoticePlacement::AddForm);
                self.surface.reset_add_form();
                ActionOutcome::Completed
            }
            Err(err) => {
                warn!(source = %channel.source, error = ?err, "Failed to add channel");
                self.surface.show_notice(Notice::from_error(
                    placement_for(&err, NoticePlacement::AddForm),
                    &err,
                    self.locale,
                ));
                ActionOutcome::Failed
            }
        };

        self.channels.refresh().await;
        outcome
    }
}
