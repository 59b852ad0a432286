//! FlowOps site backend - Main entry point

use anyhow::Result;
use flowops_site::server::{self, AppState};
use flowops_site::{sink, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not set up yet; the error goes straight to stderr.
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &config.lead_webhook_url {
        Some(url) => info!(url = %url, "Forwarding leads to webhook"),
        None => info!("No LEAD_WEBHOOK_URL set, leads will only be logged"),
    }

    let state = AppState::new(sink::from_config(&config));

    if let Err(e) = server::run_server(config.socket_addr(), state).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("FlowOps site backend shutdown complete");
    Ok(())
}
