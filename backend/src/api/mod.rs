//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the profile API domain and
//! carries the shared state handed to every handler.

pub mod extract;
pub mod profiles;

use sqlx::PgPool;

/// State injected into the router at startup. The pool is the connection
/// gateway; handlers acquire from it per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
