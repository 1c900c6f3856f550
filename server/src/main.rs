#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "elegance server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(config.leptos.clone(), &config.public_dir);
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, public_dir = %config.public_dir.display(), "elegance listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
