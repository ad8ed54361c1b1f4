use serde::{Deserialize, Serialize};

use crate::api::StatusResponse;

/// Operational mode of the relay service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    /// The transition an operator can request from this state.
    pub fn toggle_action(self) -> RunAction {
        match self {
            RunState::Running => RunAction::Pause,
            RunState::Paused => RunAction::Resume,
        }
    }
}

/// A pause/resume request sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Pause,
    Resume,
}

impl RunAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RunAction::Pause => "pause",
            RunAction::Resume => "resume",
        }
    }
}

/// Snapshot of the service state as returned by the last status fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub state: RunState,
    pub success_count: u64,
    pub error_count: u64,
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

impl From<StatusResponse> for RunStatus {
    fn from(response: StatusResponse) -> Self {
        Self {
            state: response.status,
            success_count: response.stats.success_count,
            error_count: response.stats.error_count,
        }
    }
}
