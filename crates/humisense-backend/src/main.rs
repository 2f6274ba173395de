//! humisense backend
//!
//! - `GET /health`  liveness
//! - `GET /latest`  latest sensor reading
//! - `GET /`        static panel
//! - `GET /metrics` Prometheus text
//!
//! `PORT` selects the listen port (default 3001). An empty `PORT=` is rejected
//! at startup rather than read as port 0. `HUMISENSE_CONFIG` points at an
//! optional YAML config file.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use humisense_backend::{app_state::AppState, config, server};
use humisense_core::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), error = %e, "humisense-backend failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = env::var("HUMISENSE_CONFIG").unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.into());
    let port = env::var("PORT").ok();
    let cfg = config::load(&path, port.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let listener = server::bind(listen).await?;
    tracing::info!(%listen, source = state.source().kind(), "backend listening on http://localhost:{}", listen.port());

    server::serve(listener, state, server::shutdown_signal()).await
}
