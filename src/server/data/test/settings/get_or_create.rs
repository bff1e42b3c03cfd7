use super::*;

/// Tests that the first access creates the singleton with defaults.
///
/// Expected: one row with the documented default values
#[tokio::test]
async fn creates_seo_defaults_on_first_access() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let settings = repo.get_or_create_seo().await?;

    assert!(settings.allow_indexing);
    assert_eq!(settings.og_type, "website");
    assert_eq!(settings.twitter_card, "summary_large_image");
    assert!(settings.robots_txt.is_none());

    Ok(())
}

/// Tests that repeated access reuses the same row.
///
/// Expected: exactly one row regardless of how often it is fetched
#[tokio::test]
async fn repeated_access_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);

    let first = repo.get_or_create_telegram().await?;
    let second = repo.get_or_create_telegram().await?;

    assert_eq!(first.id, second.id);
    assert_eq!(
        entity::prelude::TelegramSettings::find().count(db).await?,
        1
    );

    Ok(())
}

/// Tests the "how it works" defaults.
///
/// Expected: three default steps in the seeded JSON
#[tokio::test]
async fn seeds_default_how_work_steps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let settings = repo.get_or_create_how_work().await?;

    assert_eq!(settings.title, "How it works");
    let steps = settings.steps.unwrap();
    assert_eq!(steps.as_array().map(Vec::len), Some(3));

    Ok(())
}
