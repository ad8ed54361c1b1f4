use crate::error::DashboardError;

use super::Locale;

/// Where a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePlacement {
    /// Non-blocking banner for failed fetches and run-state requests.
    Banner,
    /// Inline next to the add-channel form.
    AddForm,
    /// Inline next to the channel table.
    ChannelTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub placement: NoticePlacement,
    pub text: String,
}

impl Notice {
    pub fn new(placement: NoticePlacement, text: impl Into<String>) -> Self {
        Self {
            placement,
            text: text.into(),
        }
    }

    pub fn from_error(placement: NoticePlacement, err: &DashboardError, locale: Locale) -> Self {
        let text = match err {
            DashboardError::Network(inner) => locale.network_failure(&inner.to_string()),
            DashboardError::Protocol { reason, .. } => locale.protocol_failure(reason),
            DashboardError::ServerRejected { message, .. } => locale.rejected(message),
            other => locale.other_failure(&other.to_string()),
        };
        Self::new(placement, text)
    }
}
