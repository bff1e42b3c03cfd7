use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use crate::{
    model::settings::{UpdateSeoSettingsDto, UpdateTelegramSettingsDto},
    server::data::settings::SettingsRepository,
};

mod get_or_create;
mod update;
