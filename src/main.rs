//! HTTP server for the EPS salary engine.

use std::net::SocketAddr;

use anyhow::Context;
use eps_salary_engine::api::{AppState, create_router};
use eps_salary_engine::config::ConfigLoader;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_DIR: &str = "./config/eps2026";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let log_format = std::env::var("SALARY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_dir =
        std::env::var("SALARY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let listen_addr: SocketAddr = std::env::var("SALARY_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()
        .context("SALARY_LISTEN_ADDR is not a valid socket address")?;

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir))?;
    let router = create_router(AppState::new(config));

    tracing::info!("Listening on {}", listen_addr);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
