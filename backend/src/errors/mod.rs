//! Global application error types and handlers.
//!
//! This module defines the error type shared by every profile endpoint and
//! renders it as the uniform JSON error body
//! `{"status": <int>, "message": <string>, "detailed_message": <string|null>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Everything a profile request can fail with.
///
/// Variants carrying a [`sqlx::Error`] surface the driver message verbatim in
/// the `detailed_message` field; the others render `null` there.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection could not be acquired from the pool.
    #[error("Error connecting to DB")]
    Connection(#[source] sqlx::Error),
    /// A read statement failed.
    #[error("Error getting the user profile")]
    Query(#[source] sqlx::Error),
    /// Create hit the `user_name` uniqueness constraint.
    #[error("User already exists")]
    UserExists(#[source] sqlx::Error),
    /// A write statement was rejected by the database.
    #[error("Input Error")]
    Input(#[source] sqlx::Error),
    /// The request body could not be deserialized.
    #[error("Input Error")]
    Malformed(String),
    /// No row matched the requested `user_name`.
    #[error("User doesn't exist")]
    UserNotFound,
    /// A partial update carried none of the updatable fields.
    #[error("No recognized profile fields in request body")]
    EmptyUpdate,
    /// POST/PUT with a content-type other than `application/json`.
    #[error("Wrong content-type. Only application/json is supported")]
    UnsupportedMediaType,
}

impl ApiError {
    /// Classifies an insert failure: a unique-violation on the primary key is
    /// a duplicate user, anything else is a generic input error.
    pub fn from_insert(err: sqlx::Error) -> Self {
        let duplicate = matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation());
        if duplicate {
            ApiError::UserExists(err)
        } else {
            ApiError::Input(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Connection(_) | ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UserExists(_)
            | ApiError::Input(_)
            | ApiError::Malformed(_)
            | ApiError::EmptyUpdate => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    fn detailed_message(&self) -> Option<String> {
        match self {
            ApiError::Connection(err)
            | ApiError::Query(err)
            | ApiError::UserExists(err)
            | ApiError::Input(err) => Some(err.to_string()),
            ApiError::Malformed(detail) => Some(detail.clone()),
            ApiError::UserNotFound | ApiError::EmptyUpdate | ApiError::UnsupportedMediaType => {
                None
            }
        }
    }
}

/// Wire shape of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub detailed_message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
            detailed_message: self.detailed_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    /// Stand-in for a driver error with a controllable kind, enough to drive
    /// the insert-failure classification.
    #[derive(Debug)]
    struct StubDatabaseError {
        unique: bool,
    }

    impl fmt::Display for StubDatabaseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message())
        }
    }

    impl StdError for StubDatabaseError {}

    impl DatabaseError for StubDatabaseError {
        fn message(&self) -> &str {
            if self.unique {
                "duplicate key value violates unique constraint \"user_profiles_pkey\""
            } else {
                "value too long for type character varying"
            }
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn duplicate_key_on_insert_is_user_exists_never_500() {
        let err = sqlx::Error::Database(Box::new(StubDatabaseError { unique: true }));
        let api = ApiError::from_insert(err);
        assert!(matches!(api, ApiError::UserExists(_)));
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), "User already exists");
        assert!(api.detailed_message().unwrap().contains("duplicate key"));
    }

    #[test]
    fn other_insert_failures_are_generic_input_errors() {
        let err = sqlx::Error::Database(Box::new(StubDatabaseError { unique: false }));
        let api = ApiError::from_insert(err);
        assert!(matches!(api, ApiError::Input(_)));
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), "Input Error");
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Connection(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Query(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Input(sqlx::Error::PoolClosed).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::EmptyUpdate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UnsupportedMediaType.status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn driver_message_lands_in_detail() {
        let err = ApiError::Connection(sqlx::Error::PoolClosed);
        let detail = err.detailed_message().unwrap();
        assert!(!detail.is_empty());

        assert_eq!(ApiError::UnsupportedMediaType.detailed_message(), None);
        assert_eq!(ApiError::UserNotFound.detailed_message(), None);
    }

    #[test]
    fn error_body_serializes_null_detail() {
        let body = ErrorBody {
            status: 415,
            message: "Wrong content-type. Only application/json is supported".into(),
            detailed_message: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], 415);
        assert!(json["detailed_message"].is_null());
    }
}
