//! DTOs for the three settings singletons and the Telegram bot API views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeoSettingsDto {
    pub id: i32,
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub site_keywords: Option<String>,
    pub default_og_image: Option<String>,
    pub og_type: String,
    pub og_site_name: Option<String>,
    pub twitter_card: String,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub organization_name: Option<String>,
    pub organization_logo: Option<String>,
    pub organization_phone: Option<String>,
    pub organization_email: Option<String>,
    pub organization_address: Option<String>,
    pub allow_indexing: bool,
    pub robots_txt: Option<String>,
    pub additional_schema: Option<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSeoSettingsDto {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub site_keywords: Option<String>,
    pub default_og_image: Option<String>,
    pub og_type: Option<String>,
    pub og_site_name: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub organization_name: Option<String>,
    pub organization_logo: Option<String>,
    pub organization_phone: Option<String>,
    pub organization_email: Option<String>,
    pub organization_address: Option<String>,
    pub allow_indexing: Option<bool>,
    pub robots_txt: Option<String>,
    pub additional_schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TelegramSettingsDto {
    pub id: i32,
    pub bot_token: Option<String>,
    pub bot_name: Option<String>,
    pub chat_id: Option<String>,
    pub webhook_url: Option<String>,
    pub is_enabled: bool,
    pub send_notifications: bool,
    pub send_errors: bool,
    pub parse_mode: String,
    pub disable_notification: bool,
    pub reply_to_message_id: Option<i64>,
    pub disable_web_page_preview: bool,
    pub additional_settings: Option<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTelegramSettingsDto {
    pub bot_token: Option<String>,
    pub bot_name: Option<String>,
    pub chat_id: Option<String>,
    pub webhook_url: Option<String>,
    pub is_enabled: Option<bool>,
    pub send_notifications: Option<bool>,
    pub send_errors: Option<bool>,
    pub parse_mode: Option<String>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub disable_web_page_preview: Option<bool>,
    pub additional_settings: Option<serde_json::Value>,
}

/// Bot identity as reported by the Telegram `getMe` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotInfoDto {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub can_join_groups: Option<bool>,
    pub can_read_all_group_messages: Option<bool>,
}

/// Webhook state as reported by the Telegram `getWebhookInfo` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebhookInfoDto {
    pub url: String,
    pub pending_update_count: i64,
    pub last_error_message: Option<String>,
}

/// Telegram settings together with the live bot identity, when the token
/// is configured and the bot API is reachable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TelegramSettingsViewDto {
    pub settings: TelegramSettingsDto,
    pub bot_info: Option<BotInfoDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestMessageDto {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HowWorkStepDto {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HowWorkBlockSettingsDto {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub is_active: bool,
    pub steps: Vec<HowWorkStepDto>,
    pub additional_settings: Option<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateHowWorkBlockSettingsDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub is_active: Option<bool>,
    pub steps: Option<Vec<HowWorkStepDto>>,
    pub additional_settings: Option<serde_json::Value>,
}
