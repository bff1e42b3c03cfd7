use super::*;

/// Tests that an existing slug is reported as taken.
///
/// Expected: true for a stored slug, false otherwise
#[tokio::test]
async fn reports_taken_and_free_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db).slug("taken").build().await?;

    let repo = PageRepository::new(db);

    assert!(repo.slug_exists("taken", None).await?);
    assert!(!repo.slug_exists("free", None).await?);

    Ok(())
}

/// Tests that the row being updated is excluded from the check.
///
/// Expected: a page's own slug does not count as a collision for itself
#[tokio::test]
async fn excludes_the_updated_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = factory::page::PageFactory::new(db).slug("mine").build().await?;
    let other = factory::page::PageFactory::new(db).slug("other").build().await?;

    let repo = PageRepository::new(db);

    assert!(!repo.slug_exists("mine", Some(page.id)).await?);
    assert!(repo.slug_exists("mine", Some(other.id)).await?);

    Ok(())
}
