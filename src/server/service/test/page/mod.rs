use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::page::CheckSlugDto,
    server::{
        error::{validation::ValidationError, AppError},
        model::page::CreatePageParams,
        service::page::PageService,
    },
};

mod check_slug;
mod create;

fn create_params(title: &str, slug: Option<&str>) -> CreatePageParams {
    CreatePageParams {
        title: title.to_string(),
        slug: slug.map(str::to_string),
        content: None,
        seo_title: None,
        seo_description: None,
        seo_keywords: None,
        is_active: true,
        order: 0,
    }
}
