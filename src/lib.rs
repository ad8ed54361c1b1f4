//! Control panel core for the channel relay service: polls run status,
//! mirrors the configured channel pairs and forwards operator actions.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod session;
pub mod surface;
pub mod view;

pub use api::{ApiClient, DashboardApi};
pub use config::Config;
pub use error::DashboardError;
pub use session::{Action, ActionOutcome, DashboardSession, RefreshOutcome, RowHandle};
pub use surface::Surface;
