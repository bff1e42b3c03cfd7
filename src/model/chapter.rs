use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChapterDto {
    pub id: i32,
    pub name: String,
    pub order: i32,
    pub is_active: bool,
}
