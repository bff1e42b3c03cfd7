//! Outbound Telegram Bot API client.
//!
//! Wraps the bot-info lookup, webhook registration and message send calls.
//! Callers that run these as side effects of a settings save catch and log
//! failures; persistence never depends on the bot API being reachable.

use serde::Deserialize;

use crate::{
    model::settings::{BotInfoDto, WebhookInfoDto},
    server::error::AppError,
};

/// Message options taken from the Telegram settings row.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub parse_mode: Option<String>,
    pub disable_notification: bool,
    pub disable_web_page_preview: bool,
    pub reply_to_message_id: Option<i64>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct BotInfoPayload {
    id: i64,
    first_name: String,
    username: Option<String>,
    can_join_groups: Option<bool>,
    can_read_all_group_messages: Option<bool>,
}

#[derive(Deserialize)]
struct WebhookInfoPayload {
    url: String,
    pending_update_count: i64,
    last_error_message: Option<String>,
}

pub struct TelegramService<'a> {
    http: &'a reqwest::Client,
    api_url: &'a str,
}

impl<'a> TelegramService<'a> {
    pub fn new(http: &'a reqwest::Client, api_url: &'a str) -> Self {
        Self { http, api_url }
    }

    /// Looks up the bot identity (`getMe`).
    pub async fn get_bot_info(&self, token: &str) -> Result<BotInfoDto, AppError> {
        let payload: BotInfoPayload = self.call(token, "getMe", None).await?;

        Ok(BotInfoDto {
            id: payload.id,
            username: payload.username,
            first_name: payload.first_name,
            can_join_groups: payload.can_join_groups,
            can_read_all_group_messages: payload.can_read_all_group_messages,
        })
    }

    /// Registers the webhook URL (`setWebhook`).
    pub async fn set_webhook(&self, token: &str, url: &str) -> Result<(), AppError> {
        let body = serde_json::json!({ "url": url });
        let _: serde_json::Value = self.call(token, "setWebhook", Some(body)).await?;

        Ok(())
    }

    /// Fetches the current webhook state (`getWebhookInfo`).
    pub async fn get_webhook_info(&self, token: &str) -> Result<WebhookInfoDto, AppError> {
        let payload: WebhookInfoPayload = self.call(token, "getWebhookInfo", None).await?;

        Ok(WebhookInfoDto {
            url: payload.url,
            pending_update_count: payload.pending_update_count,
            last_error_message: payload.last_error_message,
        })
    }

    /// Sends a message to a chat (`sendMessage`).
    pub async fn send_message(
        &self,
        token: &str,
        chat_id: &str,
        text: &str,
        options: &SendOptions,
    ) -> Result<(), AppError> {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "disable_notification": options.disable_notification,
            "disable_web_page_preview": options.disable_web_page_preview,
        });

        if let Some(parse_mode) = &options.parse_mode {
            body["parse_mode"] = serde_json::Value::String(parse_mode.clone());
        }
        if let Some(reply_to) = options.reply_to_message_id {
            body["reply_to_message_id"] = serde_json::Value::from(reply_to);
        }

        let _: serde_json::Value = self.call(token, "sendMessage", Some(body)).await?;

        Ok(())
    }

    /// Performs one bot API call and unwraps the `{ok, result}` envelope.
    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        token: &str,
        method: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, AppError> {
        let url = format!("{}/bot{}/{}", self.api_url, token, method);

        let request = match body {
            Some(body) => self.http.post(&url).json(&body),
            None => self.http.get(&url),
        };

        let envelope: Envelope<T> = request.send().await?.json().await?;

        if !envelope.ok {
            return Err(AppError::InternalError(format!(
                "Telegram API {} failed: {}",
                method,
                envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string())
            )));
        }

        envelope.result.ok_or_else(|| {
            AppError::InternalError(format!("Telegram API {} returned no result", method))
        })
    }
}
