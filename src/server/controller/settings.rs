use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorsDto},
        settings::{
            HowWorkBlockSettingsDto, SeoSettingsDto, TelegramSettingsViewDto, TestMessageDto,
            UpdateHowWorkBlockSettingsDto, UpdateSeoSettingsDto, UpdateTelegramSettingsDto,
            WebhookInfoDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        service::{
            settings::SettingsService,
            telegram::{SendOptions, TelegramService},
        },
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get the SEO settings singleton, creating it with defaults on first
/// access.
#[utoipa::path(
    get,
    path = "/api/settings/seo",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "SEO settings", body = SeoSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seo_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);

    Ok((StatusCode::OK, Json(service.get_seo().await?)))
}

/// Update the SEO settings singleton; omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/settings/seo",
    tag = SETTINGS_TAG,
    request_body = UpdateSeoSettingsDto,
    responses(
        (status = 200, description = "Updated SEO settings", body = SeoSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_seo_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSeoSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);

    Ok((StatusCode::OK, Json(service.update_seo(payload).await?)))
}

/// Get the Telegram settings together with the live bot identity when a
/// token is configured and the bot API answers.
#[utoipa::path(
    get,
    path = "/api/settings/telegram",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Telegram settings", body = TelegramSettingsViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_telegram_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);
    let telegram = TelegramService::new(&state.http_client, &state.telegram_api_url);

    Ok((
        StatusCode::OK,
        Json(service.get_telegram_view(&telegram).await?),
    ))
}

/// Update the Telegram settings singleton.
///
/// Persistence always succeeds independently of the bot API: webhook
/// registration and the bot-info refresh run afterwards and are only
/// logged when they fail.
#[utoipa::path(
    put,
    path = "/api/settings/telegram",
    tag = SETTINGS_TAG,
    request_body = UpdateTelegramSettingsDto,
    responses(
        (status = 200, description = "Updated Telegram settings", body = TelegramSettingsViewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_telegram_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateTelegramSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);
    let telegram = TelegramService::new(&state.http_client, &state.telegram_api_url);

    Ok((
        StatusCode::OK,
        Json(service.update_telegram(&telegram, payload).await?),
    ))
}

/// Send a test message through the bot to verify the token and chat id.
#[utoipa::path(
    post,
    path = "/api/settings/telegram/test",
    tag = SETTINGS_TAG,
    request_body = TestMessageDto,
    responses(
        (status = 200, description = "Test message sent", body = MessageDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Sending failed", body = ErrorDto)
    ),
)]
pub async fn test_telegram_connection(
    State(state): State<AppState>,
    Json(payload): Json<TestMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.bot_token.trim().is_empty() {
        return Err(ValidationError::field("bot_token", "Bot token is required").into());
    }
    if payload.chat_id.trim().is_empty() {
        return Err(ValidationError::field("chat_id", "Chat id is required").into());
    }

    let telegram = TelegramService::new(&state.http_client, &state.telegram_api_url);

    let text = format!(
        "Test message from the CMS\n\nTime: {}",
        chrono::Utc::now().format("%d.%m.%Y %H:%M:%S")
    );

    telegram
        .send_message(
            &payload.bot_token,
            &payload.chat_id,
            &text,
            &SendOptions {
                parse_mode: Some("HTML".to_string()),
                ..Default::default()
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Test message sent".to_string(),
        }),
    ))
}

/// Get the current webhook state from the bot API.
#[utoipa::path(
    get,
    path = "/api/settings/telegram/webhook-info",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Webhook info", body = WebhookInfoDto),
        (status = 400, description = "No bot token configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_webhook_info(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);

    let settings = service.get_telegram_raw().await?;
    let Some(token) = settings.bot_token.filter(|t| !t.is_empty()) else {
        return Err(AppError::BadRequest("No bot token configured".to_string()));
    };

    let telegram = TelegramService::new(&state.http_client, &state.telegram_api_url);

    Ok((
        StatusCode::OK,
        Json(telegram.get_webhook_info(&token).await?),
    ))
}

/// Get the "how it works" block settings singleton.
#[utoipa::path(
    get,
    path = "/api/settings/how-work-block",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Block settings", body = HowWorkBlockSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_how_work_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);

    Ok((StatusCode::OK, Json(service.get_how_work().await?)))
}

/// Update the "how it works" block settings singleton.
#[utoipa::path(
    put,
    path = "/api/settings/how-work-block",
    tag = SETTINGS_TAG,
    request_body = UpdateHowWorkBlockSettingsDto,
    responses(
        (status = 200, description = "Updated block settings", body = HowWorkBlockSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_how_work_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateHowWorkBlockSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db);

    Ok((StatusCode::OK, Json(service.update_how_work(payload).await?)))
}
