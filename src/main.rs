mod config;
mod routes;

use std::sync::Arc;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env()?;
    let mut options = get_configuration(None)
        .map_err(|e| StartupError::Leptos(e.to_string()))?
        .leptos_options;
    options.site_addr = config.addr;
    if let Some(site_root) = &config.site_root {
        options.site_root = Arc::from(site_root.as_str());
    }
    tracing::info!(site_root = %options.site_root, "serving compiled assets");

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "staybook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
