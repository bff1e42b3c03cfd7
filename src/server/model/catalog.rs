//! Catalog domain models and operation parameters.
//!
//! Products and services share the same column shape; products additionally
//! own the service relation set. `CatalogItemParams` covers both entity
//! types so the repositories and the import transform can be written once.

use crate::model::{
    catalog::{
        CreateProductDto, CreateServiceDto, ProductDto, ServiceDto, UpdateProductDto,
        UpdateServiceDto,
    },
    chapter::ChapterDto,
    media::MediaDto,
};

/// Create/overwrite input shared by products and services.
#[derive(Debug, Clone)]
pub struct CatalogItemParams {
    pub name: String,
    /// Explicit slug override; derived from the name when absent.
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub chapter_id: Option<i32>,
    /// `None` means "append after the current maximum order".
    pub order: Option<i32>,
    pub is_active: bool,
}

impl CatalogItemParams {
    pub fn from_product_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
            seo_keywords: dto.seo_keywords,
            image_id: dto.image_id,
            icon_id: dto.icon_id,
            chapter_id: dto.chapter_id,
            order: dto.order,
            is_active: dto.is_active.unwrap_or(true),
        }
    }

    pub fn from_service_dto(dto: CreateServiceDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
            seo_keywords: dto.seo_keywords,
            image_id: dto.image_id,
            icon_id: dto.icon_id,
            chapter_id: dto.chapter_id,
            order: dto.order,
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

/// Partial update shared by products and services; `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCatalogItemParams {
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

impl UpdateCatalogItemParams {
    pub fn from_product_dto(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
            seo_keywords: dto.seo_keywords,
            image_id: dto.image_id,
            icon_id: dto.icon_id,
            chapter_id: dto.chapter_id,
            order: dto.order,
            is_active: dto.is_active,
        }
    }

    pub fn from_service_dto(dto: UpdateServiceDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
            seo_keywords: dto.seo_keywords,
            image_id: dto.image_id,
            icon_id: dto.icon_id,
            chapter_id: dto.chapter_id,
            order: dto.order,
            is_active: dto.is_active,
        }
    }
}

/// Product row with resolved media, chapter and service relations.
#[derive(Debug, Clone)]
pub struct ProductWithRelations {
    pub product: entity::product::Model,
    pub image: Option<entity::media::Model>,
    pub icon: Option<entity::media::Model>,
    pub chapter: Option<entity::chapter::Model>,
    pub service_ids: Vec<i32>,
}

impl ProductWithRelations {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.product.id,
            name: self.product.name,
            slug: self.product.slug,
            description: self.product.description,
            seo_title: self.product.seo_title,
            seo_description: self.product.seo_description,
            seo_keywords: self.product.seo_keywords,
            image: self.image.map(media_to_dto),
            icon: self.icon.map(media_to_dto),
            chapter: self.chapter.map(chapter_to_dto),
            services: self.service_ids,
            order: self.product.order,
            is_active: self.product.is_active,
            created_at: self.product.created_at,
            updated_at: self.product.updated_at,
        }
    }
}

/// Service row with resolved media and chapter relations.
#[derive(Debug, Clone)]
pub struct ServiceWithRelations {
    pub service: entity::service::Model,
    pub image: Option<entity::media::Model>,
    pub icon: Option<entity::media::Model>,
    pub chapter: Option<entity::chapter::Model>,
}

impl ServiceWithRelations {
    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.service.id,
            name: self.service.name,
            slug: self.service.slug,
            description: self.service.description,
            seo_title: self.service.seo_title,
            seo_description: self.service.seo_description,
            seo_keywords: self.service.seo_keywords,
            image: self.image.map(media_to_dto),
            icon: self.icon.map(media_to_dto),
            chapter: self.chapter.map(chapter_to_dto),
            order: self.service.order,
            is_active: self.service.is_active,
            created_at: self.service.created_at,
            updated_at: self.service.updated_at,
        }
    }
}

pub fn media_to_dto(model: entity::media::Model) -> MediaDto {
    let path = model.relative_path();
    MediaDto {
        id: model.id,
        name: model.name,
        original_name: model.original_name,
        extension: model.extension,
        disk: model.disk,
        size: model.size,
        width: model.width,
        height: model.height,
        path,
    }
}

pub fn chapter_to_dto(model: entity::chapter::Model) -> ChapterDto {
    ChapterDto {
        id: model.id,
        name: model.name,
        order: model.order,
        is_active: model.is_active,
    }
}
