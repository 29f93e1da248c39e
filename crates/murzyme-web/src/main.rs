//! Murzyme Web Server
//!
//! Run with: cargo run -p murzyme-web --bin murzyme-web

use murzyme_common::MurzymeConfig;
use murzyme_web::{router::build_router, state::AppState, telemetry::init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = MurzymeConfig::load()?;
    init_tracing(&config.logging.filter)?;

    info!("Starting Murzyme Web Server...");

    let addr = config.server.bind_addr();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);
    info!("Model comparison page at http://{}/models", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
