use sea_orm::entity::prelude::*;

/// Telegram bot notification configuration singleton.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "telegram_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(column_type = "Json", nullable)]
    pub additional_settings: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
