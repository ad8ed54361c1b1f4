use async_trait::async_trait;

use crate::view::{ChannelRow, Notice, NoticePlacement, StatusView};

/// The display the dashboard renders into.
///
/// Implementations only draw; they never fetch or hold server state.
/// `show_channels` replaces the whole table, tagging it with the render
/// generation that row handles must carry.
#[async_trait]
pub trait Surface: Send + Sync {
    fn show_status(&self, view: &StatusView);

    fn show_channels(&self, generation: u64, rows: &[ChannelRow]);

    fn show_notice(&self, notice: Notice);

    fn clear_notice(&self, placement: NoticePlacement);

    fn reset_add_form(&self);

    /// Ask the operator to confirm. Declining must not have side effects.
    async fn confirm(&self, prompt: &str) -> bool;
}
