use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePageDto {
    pub title: String,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePageDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckSlugDto {
    pub slug: String,
    pub exclude_id: Option<i32>,
}

/// Result of a slug availability probe. When the slug is taken or
/// reserved, `suggested_slug` carries the first free suffixed variant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugAvailabilityDto {
    pub available: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_slug: Option<String>,
}
