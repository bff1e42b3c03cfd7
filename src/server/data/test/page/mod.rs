use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::page::PageRepository,
    model::page::{CreatePageParams, UpdatePageParams},
};

mod create;
mod delete;
mod slug_exists;
mod update;

fn create_params(title: &str) -> CreatePageParams {
    CreatePageParams {
        title: title.to_string(),
        slug: None,
        content: None,
        seo_title: None,
        seo_description: None,
        seo_keywords: None,
        is_active: true,
        order: 0,
    }
}

fn empty_update() -> UpdatePageParams {
    UpdatePageParams {
        title: None,
        slug: None,
        content: None,
        seo_title: None,
        seo_description: None,
        seo_keywords: None,
        is_active: None,
        order: None,
    }
}
