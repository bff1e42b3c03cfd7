use test_utils::builder::TestBuilder;

use crate::{
    model::settings::UpdateTelegramSettingsDto,
    server::service::{settings::SettingsService, telegram::TelegramService},
};

mod telegram;
