use crate::model::Channel;

use super::Locale;

/// One table row. Rows are rebuilt from scratch on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRow {
    pub source: String,
    pub target: String,
    /// Operator-given label, when the service has one.
    pub name: Option<String>,
    pub status_label: &'static str,
    pub keywords: String,
    pub delete_label: &'static str,
    pub delete_key: String,
}

pub fn render_channels(channels: &[Channel], locale: Locale) -> Vec<ChannelRow> {
    channels
        .iter()
        .map(|channel| ChannelRow {
            source: channel.source.clone(),
            target: channel.target.clone(),
            name: channel.name.clone(),
            status_label: if channel.is_active {
                locale.active()
            } else {
                locale.inactive()
            },
            keywords: channel.filter_keywords.join(", "),
            delete_label: locale.delete(),
            delete_key: channel.source.clone(),
        })
        .collect()
}
