//! Binary entrypoint for the sentiment HTTP server.
//!
//! Reads configuration from environment variables (see [`ServerConfig`]):
//! - `SENTIMENT_HOST` / `SENTIMENT_PORT`: listen address (default "127.0.0.1:8000")
//! - `SENTIMENT_MODEL` / `SENTIMENT_MODEL_REVISION`: Hub model to load
//! - `SENTIMENT_DEVICE`: "cpu" or "cuda:N"
//! - `SENTIMENT_ALLOWED_ORIGIN`: the single CORS origin
//! - `RUST_LOG`: tracing filter (default "info")

use std::process;

use tracing_subscriber::EnvFilter;

use sentiment_server::config::ServerConfig;
use sentiment_server::router::build_router;
use sentiment_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    tracing::info!(model = %config.model, device = %config.device, "loading sentiment model");
    let state = AppState::load(&config).await?;

    let app = build_router(state, config.allowed_origin.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("sentiment server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
