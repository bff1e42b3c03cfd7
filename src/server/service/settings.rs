//! Settings singleton orchestration.
//!
//! Wraps the settings repositories and coordinates the Telegram side
//! effects of a settings save: webhook registration and bot-info lookups
//! are best-effort and never fail the persistence that triggered them.

use sea_orm::DatabaseConnection;

use crate::{
    model::settings::{
        BotInfoDto, HowWorkBlockSettingsDto, SeoSettingsDto, TelegramSettingsDto,
        TelegramSettingsViewDto, UpdateHowWorkBlockSettingsDto, UpdateSeoSettingsDto,
        UpdateTelegramSettingsDto,
    },
    server::{data::settings::SettingsRepository, error::AppError, service::telegram::TelegramService},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_seo(&self) -> Result<SeoSettingsDto, AppError> {
        let repo = SettingsRepository::new(self.db);

        Ok(repo.get_or_create_seo().await?.into())
    }

    pub async fn update_seo(&self, dto: UpdateSeoSettingsDto) -> Result<SeoSettingsDto, AppError> {
        let repo = SettingsRepository::new(self.db);

        Ok(repo.update_seo(dto).await?.into())
    }

    pub async fn get_how_work(&self) -> Result<HowWorkBlockSettingsDto, AppError> {
        let repo = SettingsRepository::new(self.db);

        Ok(repo.get_or_create_how_work().await?.into())
    }

    pub async fn update_how_work(
        &self,
        dto: UpdateHowWorkBlockSettingsDto,
    ) -> Result<HowWorkBlockSettingsDto, AppError> {
        let repo = SettingsRepository::new(self.db);

        Ok(repo.update_how_work(dto).await?.into())
    }

    /// Returns the Telegram settings together with the live bot identity
    /// when a token is configured and the bot API answers.
    pub async fn get_telegram_view(
        &self,
        telegram: &TelegramService<'_>,
    ) -> Result<TelegramSettingsViewDto, AppError> {
        let repo = SettingsRepository::new(self.db);
        let settings = repo.get_or_create_telegram().await?;

        let bot_info = self.fetch_bot_info(telegram, settings.bot_token.as_deref()).await;

        Ok(TelegramSettingsViewDto {
            settings: settings.into(),
            bot_info,
        })
    }

    /// Persists the Telegram settings, then runs the notification-channel
    /// side effects.
    ///
    /// Webhook registration and the bot-info refresh are logged on failure
    /// but never surface as a failed update: the settings row is already
    /// saved when they run.
    pub async fn update_telegram(
        &self,
        telegram: &TelegramService<'_>,
        dto: UpdateTelegramSettingsDto,
    ) -> Result<TelegramSettingsViewDto, AppError> {
        let repo = SettingsRepository::new(self.db);
        let settings = repo.update_telegram(dto).await?;

        if settings.is_enabled {
            if let (Some(token), Some(webhook_url)) =
                (settings.bot_token.as_deref(), settings.webhook_url.as_deref())
            {
                if let Err(e) = telegram.set_webhook(token, webhook_url).await {
                    tracing::error!("Failed to set Telegram webhook: {}", e);
                }
            }
        }

        let bot_info = self.fetch_bot_info(telegram, settings.bot_token.as_deref()).await;

        Ok(TelegramSettingsViewDto {
            settings: settings.into(),
            bot_info,
        })
    }

    /// Returns the raw Telegram settings row (used by the webhook-info and
    /// test-message endpoints).
    pub async fn get_telegram_raw(&self) -> Result<TelegramSettingsDto, AppError> {
        let repo = SettingsRepository::new(self.db);

        Ok(repo.get_or_create_telegram().await?.into())
    }

    async fn fetch_bot_info(
        &self,
        telegram: &TelegramService<'_>,
        token: Option<&str>,
    ) -> Option<BotInfoDto> {
        let token = token?;
        if token.is_empty() {
            return None;
        }

        match telegram.get_bot_info(token).await {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::debug!("Telegram bot info unavailable: {}", e);
                None
            }
        }
    }
}
