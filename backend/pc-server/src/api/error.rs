//! REST API error types
//!
//! Every variant renders as an [`Envelope`] with the matching status code.
//! Store details stay in the log; clients only see the operation message.

use crate::Envelope;

use pc_core::CoreError;
use pc_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const INVALID_PROJECT_ID: &str = "invalid project id";
pub const PROJECT_NOT_FOUND: &str = "project not found";
pub const UNABLE_TO_BIND: &str = "unable to bind data";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input or field constraint violation (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// No project with the requested id (404). `id` is echoed in `data` when set.
    #[error("Resource not found: {message} (id: {id:?}) {location}")]
    NotFound {
        message: String,
        id: Option<i64>,
        location: ErrorLocation,
    },

    /// Store failure (400)
    #[error("Store error: {message}: {source} {location}")]
    Store {
        message: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_project_id() -> Self {
        ApiError::Validation {
            message: INVALID_PROJECT_ID.to_string(),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn project_not_found(id: Option<i64>) -> Self {
        ApiError::NotFound {
            message: PROJECT_NOT_FOUND.to_string(),
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Request body could not be read or deserialized.
    #[track_caller]
    pub fn unable_to_bind(detail: impl std::fmt::Display) -> Self {
        ApiError::Validation {
            message: format!("{}: {}", UNABLE_TO_BIND, detail),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a store failure behind an operation-specific client message.
    #[track_caller]
    pub fn store(message: impl Into<String>, source: DbError) -> Self {
        ApiError::Store {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::Store { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let status = self.status();
        let body = match self {
            ApiError::Validation { message, .. } | ApiError::Store { message, .. } => {
                Envelope::<i64>::empty(message)
            }
            ApiError::NotFound { message, id, .. } => Envelope { message, data: id },
        };

        (status, Json(body)).into_response()
    }
}

/// Field validation failures from the domain layer
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Unparseable or mistyped request bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::unable_to_bind(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
