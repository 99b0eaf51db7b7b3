//! Main entry point for the user profiles backend.
//!
//! This file initializes the Axum web server, sets up the database pool,
//! and registers the profile API routes. It orchestrates the application's
//! startup and defines its overall structure.

use backend::api::AppState;
use backend::config::AppConfig;
use backend::{app, database};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let db = database::connect_lazy(&config)?;
    let app = app(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
