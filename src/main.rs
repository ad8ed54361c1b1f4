use std::sync::Arc;

use relay_dashboard::console::{self, ConsoleSurface};
use relay_dashboard::{ApiClient, Config, DashboardError, DashboardSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DashboardError> {
    init_tracing();

    let config = Config::load().await;
    let api = ApiClient::new(&config)?;
    info!(api = %api.base_url(), "Starting relay dashboard");

    let surface = Arc::new(ConsoleSurface::new(config.locale, console::stdin_lines()));
    let mut session = DashboardSession::new(Arc::new(api), surface.clone(), config.locale);
    session.start().await;

    let result = console::run(&session, &surface).await;
    session.teardown().await;
    info!("Relay dashboard stopped");
    result
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("relay_dashboard=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
