use super::*;

/// Tests creating a product row.
///
/// Expected: Ok with slug and order persisted as resolved by the caller
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create("widget".to_string(), 7, item_params("Widget"))
        .await?;

    assert_eq!(product.name, "Widget");
    assert_eq!(product.slug, "widget");
    assert_eq!(product.order, 7);

    Ok(())
}

/// Tests the max-order lookup used for appending new rows.
///
/// Expected: highest order within the chapter scope, None when empty
#[tokio::test]
async fn computes_max_order_per_chapter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chapter = factory::chapter::create_chapter(db).await?;

    factory::product::ProductFactory::new(db)
        .chapter_id(chapter.id)
        .order(4)
        .build()
        .await?;
    factory::product::ProductFactory::new(db).order(9).build().await?;

    let repo = ProductRepository::new(db);

    assert_eq!(repo.max_order(Some(chapter.id)).await?, Some(4));
    assert_eq!(repo.max_order(None).await?, Some(9));

    Ok(())
}

/// Tests that the activity filter narrows the listing.
///
/// Expected: only rows matching the filter come back
#[tokio::test]
async fn filters_by_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db).slug("live").build().await?;
    factory::product::ProductFactory::new(db)
        .slug("retired")
        .active(false)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    let active = repo
        .get_filtered(ProductFilter {
            chapter_id: None,
            is_active: Some(true),
        })
        .await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].product.slug, "live");

    let all = repo.get_filtered(ProductFilter::default()).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
