//! Module for database connection setup and common utilities.
//!
//! This module constructs the connection pool the handlers draw from. The
//! pool is built lazily so a database that is down at startup surfaces as a
//! per-request connection error rather than a failure to boot.

pub mod models;
pub mod queries;
pub mod statement;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;

/// Builds the pool without opening a connection. Pool sizing and timeouts
/// stay at driver defaults; each handler acquires one connection per request
/// and releases it by scope.
pub fn connect_lazy(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().connect_lazy(&config.database_url)
}
