//! Request body extraction with the strict content-type guard.
//!
//! POST and PUT bodies are only accepted when the `Content-Type` header is
//! exactly `application/json`; anything else is rejected with 415 before the
//! body is read and before any database access.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// `Json<T>` behind the exact-match content-type guard, rejecting with the
/// standard error body instead of axum's default rejections.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        if content_type != Some(JSON_MEDIA_TYPE) {
            return Err(ApiError::UnsupportedMediaType);
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
