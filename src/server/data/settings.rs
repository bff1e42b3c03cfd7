//! Repositories for the three settings singleton tables.
//!
//! Each singleton is fetched through an explicit get-or-create: look the
//! single row up, insert the defaults if it is missing, and always update
//! that same row in place. Rows are never deleted.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::settings::{
    UpdateHowWorkBlockSettingsDto, UpdateSeoSettingsDto, UpdateTelegramSettingsDto,
};

pub struct SettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the SEO settings row, creating it with defaults on first
    /// access.
    pub async fn get_or_create_seo(&self) -> Result<entity::seo_settings::Model, DbErr> {
        if let Some(existing) = entity::prelude::SeoSettings::find().one(self.db).await? {
            return Ok(existing);
        }

        let now = Utc::now();

        entity::seo_settings::ActiveModel {
            og_type: ActiveValue::Set("website".to_string()),
            twitter_card: ActiveValue::Set("summary_large_image".to_string()),
            allow_indexing: ActiveValue::Set(true),
            site_name: ActiveValue::Set(None),
            site_description: ActiveValue::Set(None),
            site_keywords: ActiveValue::Set(None),
            default_og_image: ActiveValue::Set(None),
            og_site_name: ActiveValue::Set(None),
            twitter_site: ActiveValue::Set(None),
            twitter_creator: ActiveValue::Set(None),
            organization_name: ActiveValue::Set(None),
            organization_logo: ActiveValue::Set(None),
            organization_phone: ActiveValue::Set(None),
            organization_email: ActiveValue::Set(None),
            organization_address: ActiveValue::Set(None),
            robots_txt: ActiveValue::Set(None),
            additional_schema: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to the SEO settings row.
    pub async fn update_seo(
        &self,
        dto: UpdateSeoSettingsDto,
    ) -> Result<entity::seo_settings::Model, DbErr> {
        let current = self.get_or_create_seo().await?;
        let mut active: entity::seo_settings::ActiveModel = current.into();

        if let Some(site_name) = dto.site_name {
            active.site_name = ActiveValue::Set(Some(site_name));
        }
        if let Some(site_description) = dto.site_description {
            active.site_description = ActiveValue::Set(Some(site_description));
        }
        if let Some(site_keywords) = dto.site_keywords {
            active.site_keywords = ActiveValue::Set(Some(site_keywords));
        }
        if let Some(default_og_image) = dto.default_og_image {
            active.default_og_image = ActiveValue::Set(Some(default_og_image));
        }
        if let Some(og_type) = dto.og_type {
            active.og_type = ActiveValue::Set(og_type);
        }
        if let Some(og_site_name) = dto.og_site_name {
            active.og_site_name = ActiveValue::Set(Some(og_site_name));
        }
        if let Some(twitter_card) = dto.twitter_card {
            active.twitter_card = ActiveValue::Set(twitter_card);
        }
        if let Some(twitter_site) = dto.twitter_site {
            active.twitter_site = ActiveValue::Set(Some(twitter_site));
        }
        if let Some(twitter_creator) = dto.twitter_creator {
            active.twitter_creator = ActiveValue::Set(Some(twitter_creator));
        }
        if let Some(organization_name) = dto.organization_name {
            active.organization_name = ActiveValue::Set(Some(organization_name));
        }
        if let Some(organization_logo) = dto.organization_logo {
            active.organization_logo = ActiveValue::Set(Some(organization_logo));
        }
        if let Some(organization_phone) = dto.organization_phone {
            active.organization_phone = ActiveValue::Set(Some(organization_phone));
        }
        if let Some(organization_email) = dto.organization_email {
            active.organization_email = ActiveValue::Set(Some(organization_email));
        }
        if let Some(organization_address) = dto.organization_address {
            active.organization_address = ActiveValue::Set(Some(organization_address));
        }
        if let Some(allow_indexing) = dto.allow_indexing {
            active.allow_indexing = ActiveValue::Set(allow_indexing);
        }
        if let Some(robots_txt) = dto.robots_txt {
            active.robots_txt = ActiveValue::Set(Some(robots_txt));
        }
        if let Some(additional_schema) = dto.additional_schema {
            active.additional_schema = ActiveValue::Set(Some(additional_schema));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Returns the Telegram settings row, creating it with defaults on
    /// first access.
    pub async fn get_or_create_telegram(&self) -> Result<entity::telegram_settings::Model, DbErr> {
        if let Some(existing) = entity::prelude::TelegramSettings::find().one(self.db).await? {
            return Ok(existing);
        }

        let now = Utc::now();

        entity::telegram_settings::ActiveModel {
            bot_token: ActiveValue::Set(None),
            bot_name: ActiveValue::Set(None),
            chat_id: ActiveValue::Set(None),
            webhook_url: ActiveValue::Set(None),
            is_enabled: ActiveValue::Set(false),
            send_notifications: ActiveValue::Set(true),
            send_errors: ActiveValue::Set(false),
            parse_mode: ActiveValue::Set("HTML".to_string()),
            disable_notification: ActiveValue::Set(false),
            reply_to_message_id: ActiveValue::Set(None),
            disable_web_page_preview: ActiveValue::Set(false),
            additional_settings: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to the Telegram settings row.
    pub async fn update_telegram(
        &self,
        dto: UpdateTelegramSettingsDto,
    ) -> Result<entity::telegram_settings::Model, DbErr> {
        let current = self.get_or_create_telegram().await?;
        let mut active: entity::telegram_settings::ActiveModel = current.into();

        if let Some(bot_token) = dto.bot_token {
            active.bot_token = ActiveValue::Set(Some(bot_token));
        }
        if let Some(bot_name) = dto.bot_name {
            active.bot_name = ActiveValue::Set(Some(bot_name));
        }
        if let Some(chat_id) = dto.chat_id {
            active.chat_id = ActiveValue::Set(Some(chat_id));
        }
        if let Some(webhook_url) = dto.webhook_url {
            active.webhook_url = ActiveValue::Set(Some(webhook_url));
        }
        if let Some(is_enabled) = dto.is_enabled {
            active.is_enabled = ActiveValue::Set(is_enabled);
        }
        if let Some(send_notifications) = dto.send_notifications {
            active.send_notifications = ActiveValue::Set(send_notifications);
        }
        if let Some(send_errors) = dto.send_errors {
            active.send_errors = ActiveValue::Set(send_errors);
        }
        if let Some(parse_mode) = dto.parse_mode {
            active.parse_mode = ActiveValue::Set(parse_mode);
        }
        if let Some(disable_notification) = dto.disable_notification {
            active.disable_notification = ActiveValue::Set(disable_notification);
        }
        if let Some(reply_to_message_id) = dto.reply_to_message_id {
            active.reply_to_message_id = ActiveValue::Set(Some(reply_to_message_id));
        }
        if let Some(disable_web_page_preview) = dto.disable_web_page_preview {
            active.disable_web_page_preview = ActiveValue::Set(disable_web_page_preview);
        }
        if let Some(additional_settings) = dto.additional_settings {
            active.additional_settings = ActiveValue::Set(Some(additional_settings));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Returns the "how it works" block settings row, creating it with the
    /// default three steps on first access.
    pub async fn get_or_create_how_work(
        &self,
    ) -> Result<entity::how_work_block_settings::Model, DbErr> {
        if let Some(existing) = entity::prelude::HowWorkBlockSettings::find()
            .one(self.db)
            .await?
        {
            return Ok(existing);
        }

        let now = Utc::now();

        entity::how_work_block_settings::ActiveModel {
            title: ActiveValue::Set("How it works".to_string()),
            subtitle: ActiveValue::Set(Some("A simple process for working with us".to_string())),
            is_active: ActiveValue::Set(true),
            steps: ActiveValue::Set(Some(default_steps())),
            additional_settings: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to the "how it works" block settings row.
    pub async fn update_how_work(
        &self,
        dto: UpdateHowWorkBlockSettingsDto,
    ) -> Result<entity::how_work_block_settings::Model, DbErr> {
        let current = self.get_or_create_how_work().await?;
        let mut active: entity::how_work_block_settings::ActiveModel = current.into();

        if let Some(title) = dto.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(subtitle) = dto.subtitle {
            active.subtitle = ActiveValue::Set(Some(subtitle));
        }
        if let Some(is_active) = dto.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(steps) = dto.steps {
            let steps = serde_json::to_value(steps)
                .map_err(|e| DbErr::Custom(format!("Failed to serialize steps: {}", e)))?;
            active.steps = ActiveValue::Set(Some(steps));
        }
        if let Some(additional_settings) = dto.additional_settings {
            active.additional_settings = ActiveValue::Set(Some(additional_settings));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}

fn default_steps() -> serde_json::Value {
    serde_json::json!([
        {"title": "Step 1", "description": "Description of the first step", "icon": "1"},
        {"title": "Step 2", "description": "Description of the second step", "icon": "2"},
        {"title": "Step 3", "description": "Description of the third step", "icon": "3"},
    ])
}
