use super::*;

/// Tests the generated default with indexing allowed.
///
/// Expected: admin and API paths closed, sitemap link appended
#[test]
fn default_allows_indexing_with_admin_closed() {
    let body = default_robots_txt(true, "https://example.com");

    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Disallow: /admin/"));
    assert!(body.contains("Disallow: /api/"));
    assert!(body.contains("Allow: /"));
    assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
}

/// Tests the generated default with indexing disabled.
///
/// Expected: everything disallowed
#[test]
fn default_disallows_everything_when_indexing_off() {
    let body = default_robots_txt(false, "https://example.com/");

    assert!(body.contains("Disallow: /\n"));
    assert!(!body.contains("Allow: /"));
    assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
}

/// Tests that the stored override wins over the generated default.
///
/// Expected: the custom text is served verbatim
#[tokio::test]
async fn stored_override_is_served_verbatim() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SettingsRepository::new(db)
        .update_seo(UpdateSeoSettingsDto {
            robots_txt: Some("User-agent: *\nDisallow: /secret/".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let service = SeoService::new(db, "https://example.com");
    let body = service.robots_txt().await.unwrap();

    assert_eq!(body, "User-agent: *\nDisallow: /secret/");
}

/// Tests the flag-driven default against the database-backed path.
///
/// Expected: generated default reflects allow_indexing = false
#[tokio::test]
async fn generated_default_follows_the_indexing_flag() {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SettingsRepository::new(db)
        .update_seo(UpdateSeoSettingsDto {
            allow_indexing: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    let service = SeoService::new(db, "https://example.com");
    let body = service.robots_txt().await.unwrap();

    assert!(body.contains("Disallow: /"));
    assert!(!body.contains("Disallow: /admin/"));
}
