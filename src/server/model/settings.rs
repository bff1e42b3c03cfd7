//! Settings entity to DTO conversions.

use crate::model::settings::{
    HowWorkBlockSettingsDto, HowWorkStepDto, SeoSettingsDto, TelegramSettingsDto,
};

impl From<entity::seo_settings::Model> for SeoSettingsDto {
    fn from(model: entity::seo_settings::Model) -> Self {
        Self {
            id: model.id,
            site_name: model.site_name,
            site_description: model.site_description,
            site_keywords: model.site_keywords,
            default_og_image: model.default_og_image,
            og_type: model.og_type,
            og_site_name: model.og_site_name,
            twitter_card: model.twitter_card,
            twitter_site: model.twitter_site,
            twitter_creator: model.twitter_creator,
            organization_name: model.organization_name,
            organization_logo: model.organization_logo,
            organization_phone: model.organization_phone,
            organization_email: model.organization_email,
            organization_address: model.organization_address,
            allow_indexing: model.allow_indexing,
            robots_txt: model.robots_txt,
            additional_schema: model.additional_schema,
            updated_at: model.updated_at,
        }
    }
}

impl From<entity::telegram_settings::Model> for TelegramSettingsDto {
    fn from(model: entity::telegram_settings::Model) -> Self {
        Self {
            id: model.id,
            bot_token: model.bot_token,
            bot_name: model.bot_name,
            chat_id: model.chat_id,
            webhook_url: model.webhook_url,
            is_enabled: model.is_enabled,
            send_notifications: model.send_notifications,
            send_errors: model.send_errors,
            parse_mode: model.parse_mode,
            disable_notification: model.disable_notification,
            reply_to_message_id: model.reply_to_message_id,
            disable_web_page_preview: model.disable_web_page_preview,
            additional_settings: model.additional_settings,
            updated_at: model.updated_at,
        }
    }
}

impl From<entity::how_work_block_settings::Model> for HowWorkBlockSettingsDto {
    fn from(model: entity::how_work_block_settings::Model) -> Self {
        // Steps are stored as a JSON array; malformed persisted data is
        // presented as an empty list rather than failing the read.
        let steps: Vec<HowWorkStepDto> = model
            .steps
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            is_active: model.is_active,
            steps,
            additional_settings: model.additional_settings,
            updated_at: model.updated_at,
        }
    }
}
