use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TelegramSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(TelegramSettings::Id))
                    .col(string_null(TelegramSettings::BotToken))
                    .col(string_null(TelegramSettings::BotName))
                    .col(string_null(TelegramSettings::ChatId))
                    .col(string_null(TelegramSettings::WebhookUrl))
                    .col(boolean(TelegramSettings::IsEnabled).default(false))
                    .col(boolean(TelegramSettings::SendNotifications).default(true))
                    .col(boolean(TelegramSettings::SendErrors).default(false))
                    .col(string(TelegramSettings::ParseMode).default("HTML"))
                    .col(boolean(TelegramSettings::DisableNotification).default(false))
                    .col(big_integer_null(TelegramSettings::ReplyToMessageId))
                    .col(boolean(TelegramSettings::DisableWebPagePreview).default(false))
                    .col(json_null(TelegramSettings::AdditionalSettings))
                    .col(timestamp_with_time_zone(TelegramSettings::CreatedAt))
                    .col(timestamp_with_time_zone(TelegramSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TelegramSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TelegramSettings {
    Table,
    Id,
    BotToken,
    BotName,
    ChatId,
    WebhookUrl,
    IsEnabled,
    SendNotifications,
    SendErrors,
    ParseMode,
    DisableNotification,
    ReplyToMessageId,
    DisableWebPagePreview,
    AdditionalSettings,
    CreatedAt,
    UpdatedAt,
}
