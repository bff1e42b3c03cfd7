use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MediaDto {
    pub id: i32,
    pub name: String,
    pub original_name: Option<String>,
    pub extension: Option<String>,
    pub disk: String,
    pub size: Option<i64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Relative path of the binary below the storage root (`disk/name`).
    pub path: String,
}
