use thiserror::Error;

/// Failures the dashboard can run into while talking to the relay service.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request could not be sent or no response came back.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response arrived but does not match the expected shape.
    #[error("unexpected response from {endpoint}: {reason}")]
    Protocol { endpoint: String, reason: String },

    /// The service answered with a non-success status.
    #[error("{endpoint} rejected the request ({status}): {message}")]
    ServerRejected {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// A channel key that cannot be carried as a single URL path segment.
    #[error("channel source {0:?} cannot be addressed in a request path")]
    UnaddressableSource(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn protocol(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::Protocol {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ServerRejected { status: 404, .. })
    }
}
