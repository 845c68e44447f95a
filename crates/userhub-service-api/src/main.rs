//! UserHub account HTTP API binary.
//!
//! # Endpoints
//!
//! - `POST /api/auth.register` - Register a new account
//! - `POST /api/auth.login` - Authenticate an account
//! - `GET /api/user.getProfile/:id` - Fetch a user's profile
//! - `GET /health-check` - Service health
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 3000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use tracing::info;

use userhub_service_api::build_app;
use userhub_service_shared::{init_logging, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // In-memory wiring; swapping in a persistent repository only changes
    // this composition root.
    let state = AppState::in_memory();
    let app = build_app(&state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
