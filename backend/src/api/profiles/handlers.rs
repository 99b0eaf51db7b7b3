//! Handler functions for the user profile endpoints.
//!
//! Each handler acquires one connection from the pool, executes exactly one
//! statement through `database::queries`, and maps the outcome to an HTTP
//! status. The connection is released by scope on every exit path.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::api::extract::ApiJson;
use crate::api::AppState;
use crate::database::models::{NewProfile, ProfileUpdate, UserProfile};
use crate::database::statement::build_update;
use crate::database::queries;
use crate::errors::ApiError;

/// Characters escaped when a user name is embedded as a URL path segment.
/// Controls and non-ASCII bytes are always encoded, which also keeps the
/// resulting `Location` value header-legal.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn profile_location(user_name: &str) -> String {
    format!(
        "/user_profiles/{}",
        utf8_percent_encode(user_name, PATH_SEGMENT)
    )
}

/// GET /user_profiles
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let mut conn = state.db.acquire().await.map_err(ApiError::Connection)?;
    let profiles = queries::list_profiles(&mut conn)
        .await
        .map_err(ApiError::Query)?;
    tracing::debug!(count = profiles.len(), "listed user profiles");
    Ok(Json(profiles))
}

/// GET /user_profiles/:user_name
///
/// The body is an array for symmetry with the list endpoint; it always holds
/// exactly one element on success, and a missing user is a 404.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let mut conn = state.db.acquire().await.map_err(ApiError::Connection)?;
    let profile = queries::find_profile(&mut conn, &user_name)
        .await
        .map_err(ApiError::Query)?
        .ok_or(ApiError::UserNotFound)?;
    Ok(Json(vec![profile]))
}

/// POST /user_profiles
pub async fn create_profile(
    State(state): State<AppState>,
    ApiJson(profile): ApiJson<NewProfile>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = state.db.acquire().await.map_err(ApiError::Connection)?;
    queries::insert_profile(&mut conn, &profile)
        .await
        .map_err(ApiError::from_insert)?;
    tracing::debug!(user_name = %profile.user_name, "user profile created");

    let location = profile_location(&profile.user_name);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// PUT /user_profiles/:user_name
///
/// The statement is built before a connection is acquired, so a body with no
/// updatable fields never reaches the database.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> Result<StatusCode, ApiError> {
    let statement = build_update(&user_name, &update).ok_or(ApiError::EmptyUpdate)?;

    let mut conn = state.db.acquire().await.map_err(ApiError::Connection)?;
    let affected = queries::update_profile(&mut conn, &statement)
        .await
        .map_err(ApiError::Input)?;
    if affected == 0 {
        return Err(ApiError::UserNotFound);
    }
    tracing::debug!(user_name = %user_name, columns = ?statement.columns, "user profile updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /user_profiles/:user_name
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.db.acquire().await.map_err(ApiError::Connection)?;
    let affected = queries::delete_profile(&mut conn, &user_name)
        .await
        .map_err(ApiError::Input)?;
    if affected == 0 {
        return Err(ApiError::UserNotFound);
    }
    tracing::debug!(user_name = %user_name, "user profile deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_passes_plain_names_through() {
        assert_eq!(profile_location("alice"), "/user_profiles/alice");
    }

    #[test]
    fn location_stays_header_legal_for_hostile_names() {
        let location = profile_location("ali\nce /..%");
        assert_eq!(location, "/user_profiles/ali%0Ace%20%2F..%25");
        assert!(location
            .bytes()
            .all(|b| b.is_ascii_graphic()));
    }

    #[test]
    fn location_encodes_non_ascii_names() {
        let location = profile_location("ålice");
        assert!(location.is_ascii());
        assert!(location.contains('%'));
    }
}
