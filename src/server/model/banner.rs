//! Banner domain parameters and DTO conversion.

use crate::model::banner::{BannerDto, CreateBannerDto, UpdateBannerDto};

#[derive(Debug, Clone)]
pub struct CreateBannerParams {
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
    pub is_active: bool,
    pub order: i32,
}

impl CreateBannerParams {
    pub fn from_dto(dto: CreateBannerDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            background_image: dto.background_image,
            heading_1: dto.heading_1,
            heading_2: dto.heading_2,
            description: dto.description,
            button_text: dto.button_text,
            button_type: dto.button_type,
            button_value: dto.button_value,
            height_desktop: dto.height_desktop,
            height_mobile: dto.height_mobile,
            is_active: dto.is_active.unwrap_or(true),
            order: dto.order.unwrap_or(0),
        }
    }
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateBannerParams {
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

impl UpdateBannerParams {
    pub fn from_dto(dto: UpdateBannerDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            background_image: dto.background_image,
            heading_1: dto.heading_1,
            heading_2: dto.heading_2,
            description: dto.description,
            button_text: dto.button_text,
            button_type: dto.button_type,
            button_value: dto.button_value,
            height_desktop: dto.height_desktop,
            height_mobile: dto.height_mobile,
            is_active: dto.is_active,
            order: dto.order,
        }
    }
}

impl From<entity::banner::Model> for BannerDto {
    fn from(model: entity::banner::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            background_image: model.background_image,
            heading_1: model.heading_1,
            heading_2: model.heading_2,
            description: model.description,
            button_text: model.button_text,
            button_type: model.button_type,
            button_value: model.button_value,
            height_desktop: model.height_desktop,
            height_mobile: model.height_mobile,
            is_active: model.is_active,
            order: model.order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
