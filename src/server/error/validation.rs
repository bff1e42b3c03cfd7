use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorsDto;

/// Request validation failures, all answered with 422 Unprocessable Entity.
///
/// The reserved-slug conflict is a distinct variant rather than a generic
/// field error so callers cannot confuse it with a taken slug: a reserved
/// slug is rejected outright, never suffixed into a free one.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more request fields failed validation.
    #[error("validation failed")]
    Fields(BTreeMap<String, Vec<String>>),

    /// The requested or derived slug collides with a reserved application
    /// route.
    #[error("slug '{0}' is a reserved application route")]
    ReservedPath(String),

    /// Uploaded file exceeds the import size limit.
    #[error("upload of {size_mb:.2} MB exceeds the {limit_mb} MB limit")]
    UploadTooLarge { size_mb: f64, limit_mb: u64 },

    /// Uploaded file has an unsupported extension or MIME type.
    #[error("unsupported upload type '{0}', expected csv or zip")]
    UnsupportedUploadType(String),
}

impl ValidationError {
    /// Single-field validation failure.
    pub fn field(name: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(name.to_string(), vec![message.to_string()]);
        Self::Fields(errors)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::Fields(errors) => ValidationErrorsDto {
                message: "Validation failed".to_string(),
                errors,
            },
            Self::ReservedPath(slug) => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "slug".to_string(),
                    vec![format!(
                        "The URL '{}' is reserved by the application. Use another slug.",
                        slug
                    )],
                );
                ValidationErrorsDto {
                    message: "reserved_path".to_string(),
                    errors,
                }
            }
            Self::UploadTooLarge { size_mb, limit_mb } => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "file".to_string(),
                    vec![
                        format!("File size: {:.2} MB", size_mb),
                        format!("Maximum size: {} MB", limit_mb),
                    ],
                );
                ValidationErrorsDto {
                    message: "File is too large".to_string(),
                    errors,
                }
            }
            Self::UnsupportedUploadType(kind) => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "file".to_string(),
                    vec![format!("Unsupported file type: {}", kind)],
                );
                ValidationErrorsDto {
                    message: "Only csv and zip files are supported".to_string(),
                    errors,
                }
            }
        };

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}
