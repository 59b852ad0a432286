//! HTTP server for the FlowOps site API.
//!
//! Exposes the health check and the contact-form gateway. Handlers share an
//! [`AppState`] holding the lead sink and request counters.

pub mod handlers;

use crate::metrics::Metrics;
use crate::sink::LeadSink;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn LeadSink>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self {
            sink,
            metrics: Metrics::new(),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(handlers::health).options(handlers::preflight),
        )
        .route(
            "/api/contact",
            post(handlers::submit_contact).options(handlers::preflight),
        )
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "Listening");
    serve(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics = state.metrics.clone();

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    let summary = metrics.summary();
    info!(
        submissions = summary.submissions_total,
        accepted = summary.accepted_total,
        invalid = summary.invalid_total,
        malformed = summary.malformed_total,
        failed = summary.failed_total,
        abandoned = summary.abandoned_total,
        health_checks = summary.health_checks_total,
        avg_ms = summary.duration_avg_ms,
        "Server stopped"
    );

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
