use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BannerDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub background_image: Option<String>,
    pub heading_1: Option<String>,
    pub heading_2: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_type: Option<String>,
    pub button_value: Option<String>,
    pub height_desktop: Option<i32>,
    pub height_mobile: Option<i32>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBannerDto {
    pub title: String,
    pub slug: Option<String>,
    pub background_image: Option<String>,
    pub heading_1: Option<String>,
    pub heading_2: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_type: Option<String>,
    pub button_value: Option<String>,
    pub height_desktop: Option<i32>,
    pub height_mobile: Option<i32>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBannerDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub background_image: Option<String>,
    pub heading_1: Option<String>,
    pub heading_2: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_type: Option<String>,
    pub button_value: Option<String>,
    pub height_desktop: Option<i32>,
    pub height_mobile: Option<i32>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}
