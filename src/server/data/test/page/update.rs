use super::*;

/// Tests that a partial update only touches the provided fields.
///
/// Expected: title changes, other fields keep their stored values
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::PageFactory::new(db)
        .title("Original")
        .slug("original")
        .content("body")
        .order(3)
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(
            page.id,
            None,
            UpdatePageParams {
                title: Some("Renamed".to_string()),
                ..empty_update()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, "original");
    assert_eq!(updated.content.as_deref(), Some("body"));
    assert_eq!(updated.order, 3);
    assert!(updated.updated_at >= page.updated_at);

    Ok(())
}

/// Tests that a resolved slug replacement is applied.
///
/// Expected: slug changes to the caller-resolved value
#[tokio::test]
async fn applies_resolved_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::PageFactory::new(db).slug("before").build().await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(page.id, Some("after".to_string()), empty_update())
        .await?
        .unwrap();

    assert_eq!(updated.slug, "after");

    Ok(())
}

/// Tests updating a missing page.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);

    assert!(repo.update(4242, None, empty_update()).await?.is_none());

    Ok(())
}
