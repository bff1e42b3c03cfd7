use super::*;

/// Tests creating a page with the resolved slug and defaults.
///
/// Expected: Ok with the row persisted as given
#[tokio::test]
async fn creates_page_with_resolved_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);
    let page = repo
        .create("about-us".to_string(), create_params("About Us"))
        .await?;

    assert_eq!(page.title, "About Us");
    assert_eq!(page.slug, "about-us");
    assert!(page.is_active);
    assert_eq!(page.order, 0);

    let stored = entity::prelude::Page::find_by_id(page.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that listing returns pages sorted by order.
///
/// Expected: rows come back in ascending `order`
#[tokio::test]
async fn lists_pages_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db)
        .title("Second")
        .slug("second")
        .order(5)
        .build()
        .await?;
    factory::page::PageFactory::new(db)
        .title("First")
        .slug("first")
        .order(1)
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let pages = repo.get_all_ordered().await?;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].slug, "first");
    assert_eq!(pages[1].slug, "second");

    Ok(())
}

/// Tests that the active-by-slug lookup ignores inactive pages.
///
/// Expected: None for an inactive page's slug
#[tokio::test]
async fn active_lookup_skips_inactive_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db)
        .slug("hidden")
        .active(false)
        .build()
        .await?;

    let repo = PageRepository::new(db);

    assert!(repo.get_active_by_slug("hidden").await?.is_none());

    Ok(())
}
