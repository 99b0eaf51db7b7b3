//! Defines the HTTP routes for the user profile API.
//!
//! These routes map the five profile operations onto their handler functions.

use axum::{routing::get, Router};

use super::handlers::{
    create_profile, delete_profile, get_profile, list_profiles, update_profile,
};
use crate::api::AppState;

pub fn profiles_router() -> Router<AppState> {
    Router::new()
        .route("/user_profiles", get(list_profiles).post(create_profile))
        .route(
            "/user_profiles/:user_name",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}
