//! DTOs for the product and service catalog, including the import report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{chapter::ChapterDto, media::MediaDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image: Option<MediaDto>,
    pub icon: Option<MediaDto>,
    pub chapter: Option<ChapterDto>,
    pub services: Vec<i32>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image: Option<MediaDto>,
    pub icon: Option<MediaDto>,
    pub chapter: Option<ChapterDto>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
    /// Service ids to relate; the relation set is replaced wholesale.
    pub services: Option<Vec<i32>>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
    pub services: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateServiceDto {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateServiceDto {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Outcome of a catalog import: per-row failures are collected in
/// `errors` while the import keeps processing the remaining rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportReportDto {
    pub success: bool,
    pub message: String,
    pub success_count: usize,
    pub skip_count: usize,
    pub errors: Vec<String>,
}
