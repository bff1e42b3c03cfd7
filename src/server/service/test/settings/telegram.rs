use super::*;

/// Tests that an unreachable bot API never blocks a settings save.
///
/// The API base URL points at a closed port, so the webhook registration
/// and bot-info lookup both fail; the update must still persist and
/// return.
///
/// Expected: Ok with the new values stored and no bot info attached
#[tokio::test]
async fn bot_api_failure_does_not_block_the_save() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let http = reqwest::Client::new();
    let telegram = TelegramService::new(&http, "http://127.0.0.1:9");

    let service = SettingsService::new(db);
    let view = service
        .update_telegram(
            &telegram,
            UpdateTelegramSettingsDto {
                bot_token: Some("123:abc".to_string()),
                webhook_url: Some("https://example.com/hook".to_string()),
                is_enabled: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(view.settings.bot_token.as_deref(), Some("123:abc"));
    assert!(view.settings.is_enabled);
    assert!(view.bot_info.is_none());

    // The stored row reflects the update.
    let stored = service.get_telegram_raw().await.unwrap();
    assert_eq!(stored.webhook_url.as_deref(), Some("https://example.com/hook"));
}

/// Tests the settings view without a configured token.
///
/// Expected: settings returned, bot info absent, no API call attempted
#[tokio::test]
async fn view_without_token_skips_the_bot_lookup() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let http = reqwest::Client::new();
    let telegram = TelegramService::new(&http, "http://127.0.0.1:9");

    let service = SettingsService::new(db);
    let view = service.get_telegram_view(&telegram).await.unwrap();

    assert!(view.settings.bot_token.is_none());
    assert!(view.bot_info.is_none());
}
