//! Pure mappings from fetched snapshots to what the surface displays.

mod channels;
mod locale;
mod notice;
mod status;

pub use channels::{render_channels, ChannelRow};
pub use locale::Locale;
pub use notice::{Notice, NoticePlacement};
pub use status::{render_status, ChartView, IndicatorColor, StatusView};
