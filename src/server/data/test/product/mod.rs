use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::product::{ProductFilter, ProductRepository},
    model::catalog::CatalogItemParams,
};

mod create;
mod relations;
mod sync_services;

fn item_params(name: &str) -> CatalogItemParams {
    CatalogItemParams {
        name: name.to_string(),
        slug: None,
        description: None,
        seo_title: None,
        seo_description: None,
        seo_keywords: None,
        image_id: None,
        icon_id: None,
        chapter_id: None,
        order: None,
        is_active: true,
    }
}
