use super::*;

/// Tests probing a free slug.
///
/// Expected: available, no suggestion
#[tokio::test]
async fn reports_free_slug_as_available() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);
    let result = service
        .check_slug(CheckSlugDto {
            slug: "brand-new".to_string(),
            exclude_id: None,
        })
        .await
        .unwrap();

    assert!(result.available);
    assert!(result.suggested_slug.is_none());
}

/// Tests probing a taken slug.
///
/// Expected: unavailable with the first free suffix suggested
#[tokio::test]
async fn suggests_suffix_for_taken_slug() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db).slug("news").build().await.unwrap();

    let service = PageService::new(db);
    let result = service
        .check_slug(CheckSlugDto {
            slug: "news".to_string(),
            exclude_id: None,
        })
        .await
        .unwrap();

    assert!(!result.available);
    assert_eq!(result.suggested_slug.as_deref(), Some("news-1"));
}

/// Tests that a page's own slug stays available during an update probe.
///
/// Expected: available when exclude_id points at the owner
#[tokio::test]
async fn own_slug_is_available_for_update() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::PageFactory::new(db).slug("mine").build().await.unwrap();

    let service = PageService::new(db);
    let result = service
        .check_slug(CheckSlugDto {
            slug: "mine".to_string(),
            exclude_id: Some(page.id),
        })
        .await
        .unwrap();

    assert!(result.available);
}

/// Tests probing a reserved slug.
///
/// Expected: unavailable with a non-reserved suggestion
#[tokio::test]
async fn reserved_slug_gets_non_reserved_suggestion() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);
    let result = service
        .check_slug(CheckSlugDto {
            slug: "cases".to_string(),
            exclude_id: None,
        })
        .await
        .unwrap();

    assert!(!result.available);
    assert_eq!(result.suggested_slug.as_deref(), Some("cases-1"));
}
