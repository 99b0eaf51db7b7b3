//! Backend library for the user profiles REST service.
//!
//! A thin HTTP-to-SQL layer: five endpoints over one `user_profiles` table,
//! each executing a single parameterized statement per request.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;

use axum::Router;

use api::AppState;

/// Assembles the full application router over the given state.
pub fn app(state: AppState) -> Router {
    api::profiles::routes::profiles_router().with_state(state)
}
