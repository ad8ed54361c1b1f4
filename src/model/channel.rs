use crate::api::ChannelEntry;
use crate::error::DashboardError;

/// A configured source to target forwarding pair. `source` is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub source: String,
    pub target: String,
    pub is_active: bool,
    pub name: Option<String>,
    pub filter_keywords: Vec<String>,
}

impl Channel {
    /// Validate a decoded list entry. Empty keys violate the data model.
    pub(crate) fn from_entry(entry: ChannelEntry, endpoint: &str) -> Result<Self, DashboardError> {
        if entry.source.trim().is_empty() {
            return Err(DashboardError::protocol(endpoint, "channel with empty source"));
        }
        if entry.target.trim().is_empty() {
            return Err(DashboardError::protocol(
                endpoint,
                format!("channel {} has an empty target", entry.source),
            ));
        }

        Ok(Self {
            source: entry.source,
            target: entry.target,
            is_active: entry.is_active,
            name: entry.name.filter(|name| !name.trim().is_empty()),
            filter_keywords: entry
                .filter_keywords
                .into_iter()
                .map(|kw| kw.trim().to_string())
                .filter(|kw| !kw.is_empty())
                .collect(),
        })
    }
}

/// Channel pair the operator asks the service to add.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewChannel {
    pub source: String,
    pub target: String,
    pub filter_keywords: Vec<String>,
}

impl NewChannel {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            filter_keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.filter_keywords = keywords;
        self
    }

    /// Presence check only; anything beyond that is for the service to judge.
    pub fn is_complete(&self) -> bool {
        !self.source.trim().is_empty() && !self.target.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(source: &str, target: &str) -> ChannelEntry {
        ChannelEntry {
            source: source.to_string(),
            target: target.to_string(),
            is_active: true,
            name: None,
            filter_keywords: Vec::new(),
        }
    }

    #[test]
    fn empty_source_is_a_protocol_error() {
        let err = Channel::from_entry(entry(" ", "b"), "/api/channels").unwrap_err();
        assert!(matches!(err, DashboardError::Protocol { .. }));
    }

    #[test]
    fn empty_target_is_a_protocol_error() {
        let err = Channel::from_entry(entry("a", ""), "/api/channels").unwrap_err();
        assert!(err.to_string().contains("empty target"));
    }

    #[test]
    fn blank_keywords_are_dropped() {
        let mut raw = entry("a", "b");
        raw.filter_keywords = vec!["".to_string(), " sale ".to_string()];
        raw.name = Some(String::new());
        let channel = Channel::from_entry(raw, "/api/channels").unwrap();
        assert_eq!(channel.filter_keywords, vec!["sale".to_string()]);
        assert_eq!(channel.name, None);
    }

    #[test]
    fn presence_check_ignores_whitespace() {
        assert!(NewChannel::new("a", "b").is_complete());
        assert!(!NewChannel::new("  ", "b").is_complete());
        assert!(!NewChannel::new("a", "").is_complete());
    }
}
