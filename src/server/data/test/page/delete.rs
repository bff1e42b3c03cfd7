use super::*;

/// Tests deleting an existing page.
///
/// Expected: true, and the row is gone
#[tokio::test]
async fn deletes_existing_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::create_page(db).await?;

    let repo = PageRepository::new(db);

    assert!(repo.delete(page.id).await?);
    assert!(entity::prelude::Page::find_by_id(page.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a missing page.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_missing_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);

    assert!(!repo.delete(9000).await?);

    Ok(())
}
