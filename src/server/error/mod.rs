//! Error types and HTTP response handling.
//!
//! Provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and
//! implements `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for
/// automatic error conversion. Validation errors handle their own response
/// mapping (422 with field-level messages), while generic variants provide
/// standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request validation error, including reserved-slug conflicts and
    /// rejected uploads.
    ///
    /// Delegates to `ValidationError::into_response()` (422 Unprocessable
    /// Entity with per-field messages).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Filesystem error while reading or writing media binaries.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// CSV serialization error during catalog export.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    CsvErr(#[from] csv::Error),

    /// Archive error during catalog export.
    ///
    /// Import-side archive problems are reported as top-level import
    /// failures instead; this variant only carries export failures.
    #[error(transparent)]
    ZipErr(#[from] zip::result::ZipError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is always logged;
    /// it is returned to the client only when debug mode is enabled.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response
/// body. Validation errors delegate to their own response handling, while
/// other errors use standard mappings. Internal errors are logged with full
/// details but return generic messages unless debug mode is enabled.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client unless debug mode is enabled, in which case the
/// message detail is included in the response body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let error = if crate::server::config::debug_enabled() {
            self.0.to_string()
        } else {
            "Internal server error".to_string()
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto { error })).into_response()
    }
}
