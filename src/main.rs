mod config;
mod errors;
mod handlers;
mod ocr;
mod render;
mod routes;
mod state;
mod translate;
mod upload;

#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ocr_translate=debug,tower_http=debug")),
        )
        .init();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf.yaml".to_string());
    let config = Config::load(&config_path)?;
    info!("Loaded configuration (file: {})", config_path);

    // Ensure directories exist
    std::fs::create_dir_all(&config.system_config.upload_dir)?;
    info!("Staging uploads in {}", config.system_config.upload_dir);

    let app_state = AppState::new(config.clone()).await?;
    app_state.orchestrator.probe_languages().await;

    let app = routes::app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.system_config.host, config.system_config.port)
        .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
