use super::*;

/// Tests the slug lookup used as the import key.
///
/// Expected: inactive rows are still found by slug
#[tokio::test]
async fn finds_inactive_rows_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::service::ServiceFactory::new(db)
        .slug("archived")
        .active(false)
        .build()
        .await?;

    let repo = ServiceRepository::new(db);

    assert!(repo.find_by_slug("archived").await?.is_some());
    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}

/// Tests a partial update clearing nothing and changing the description.
///
/// Expected: description replaced, name untouched
#[tokio::test]
async fn updates_description_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::service::ServiceFactory::new(db)
        .name("Consulting")
        .build()
        .await?;

    let repo = ServiceRepository::new(db);
    let updated = repo
        .update(
            service.id,
            None,
            UpdateCatalogItemParams {
                description: Some(serde_json::json!({"short": "expert advice"})),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Consulting");
    assert_eq!(
        updated.description,
        Some(serde_json::json!({"short": "expert advice"}))
    );

    Ok(())
}
