//! Page domain parameters and DTO conversion.

use crate::model::page::{CreatePageDto, PageDto, UpdatePageDto};

#[derive(Debug, Clone)]
pub struct CreatePageParams {
    pub title: String,
    /// Explicit slug override; derived from the title when absent.
    pub slug: Option<String>,
    pub content: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub is_active: bool,
    pub order: i32,
}

impl CreatePageParams {
    pub fn from_dto(dto: CreatePageDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            content: dto.content,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
            seo_keywords: dto.seo_keywords,
            is_active: dto.is_active.unwrap_or(true),
            order: dto.order.unwrap_or(0),
        }
    }
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdatePageParams {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl UpdatePageParams {
    pub fn from_dto(dto: UpdatePageDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            content: dto.content,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
            seo_keywords: dto.seo_keywords,
            is_active: dto.is_active,
            order: dto.order,
        }
    }
}

impl From<entity::page::Model> for PageDto {
    fn from(model: entity::page::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            content: model.content,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            seo_keywords: model.seo_keywords,
            is_active: model.is_active,
            order: model.order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
