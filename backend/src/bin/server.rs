//! SDR Web API Server Binary
//!
//! Main entry point of the instrument control REST API. It loads the server
//! configuration, builds the settings mapper, installs the in-memory
//! instrument adapter and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sdr-webapi-server
//!
//! # With a configuration file
//! SDR_WEBAPI_CONFIG=webapi.toml cargo run --bin sdr-webapi-server
//! ```
//!
//! # Environment Variables
//!
//! - `SDR_WEBAPI_CONFIG`: Path of the TOML configuration file (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8091)
//! - `SDR_WEBAPI_BODY_LIMIT`: Maximum request body size in bytes
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sdr_webapi::adapter::{LocalAdapter, WebApiAdapter};
use sdr_webapi::config::ServerConfig;
use sdr_webapi::http::{create_router_with_limit, AppState};
use sdr_webapi::mapping::SettingsMapper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SDR Web API server");

    let config = ServerConfig::load()?;
    let mapper = SettingsMapper::new(&config.preset_channels)?;
    info!(
        "Settings mapper ready ({} preset channel URIs)",
        config.preset_channels.len()
    );

    let adapter = Arc::new(LocalAdapter::new()) as Arc<dyn WebApiAdapter>;
    let state = AppState::new(adapter, mapper);
    let app = create_router_with_limit(state, config.body_limit);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Instance summary: http://{}/instance/summary", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
