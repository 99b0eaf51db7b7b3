//! Central module for application-wide configuration settings.
//!
//! This module loads the database URL and the server listen address from the
//! environment into a single `AppConfig` value that is passed down at startup,
//! so no connection parameters live in process-wide mutable state.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

/// Address the HTTP listener binds when `LISTEN_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("invalid LISTEN_ADDR")]
    InvalidListenAddr(#[from] AddrParseError),
}

/// Runtime configuration, resolved once in `main` and injected into the
/// handler layer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for the profile database.
    pub database_url: String,
    /// TCP address the HTTP listener binds.
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `LISTEN_ADDR` falls back to
    /// [`DEFAULT_LISTEN_ADDR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()?;

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}
