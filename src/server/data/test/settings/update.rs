use super::*;

/// Tests a partial SEO settings update.
///
/// Expected: provided fields change, everything else keeps its value
#[tokio::test]
async fn updates_provided_seo_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    repo.get_or_create_seo().await?;

    let updated = repo
        .update_seo(UpdateSeoSettingsDto {
            site_name: Some("Acme".to_string()),
            allow_indexing: Some(false),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.site_name.as_deref(), Some("Acme"));
    assert!(!updated.allow_indexing);
    assert_eq!(updated.og_type, "website");

    Ok(())
}

/// Tests that updating without a prior read still works.
///
/// Expected: the row is created, then updated, in one call
#[tokio::test]
async fn update_creates_the_singleton_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);

    let updated = repo
        .update_telegram(UpdateTelegramSettingsDto {
            bot_token: Some("123:abc".to_string()),
            is_enabled: Some(true),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.bot_token.as_deref(), Some("123:abc"));
    assert!(updated.is_enabled);
    assert_eq!(updated.parse_mode, "HTML");

    Ok(())
}
