use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Validation failure payload: an overall message plus per-field error
/// lists, returned with status 422.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}
