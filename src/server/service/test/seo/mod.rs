use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::settings::UpdateSeoSettingsDto,
    server::{
        data::settings::SettingsRepository,
        service::seo::{default_robots_txt, SeoService},
    },
};

mod robots;
mod sitemap;
