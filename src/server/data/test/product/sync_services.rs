use super::*;

/// Tests that syncing replaces the relation set wholesale.
///
/// Expected: old links removed, new links present, duplicates collapsed
#[tokio::test]
async fn replaces_relation_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;
    let first = factory::service::create_service(db).await?;
    let second = factory::service::create_service(db).await?;

    let repo = ProductRepository::new(db);

    repo.sync_services(product.id, &[first.id]).await?;
    repo.sync_services(product.id, &[second.id, second.id]).await?;

    let links = entity::prelude::ProductService::find()
        .filter(entity::product_service::Column::ProductId.eq(product.id))
        .all(db)
        .await?;

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].service_id, second.id);

    Ok(())
}

/// Tests that deleting a product removes its relation rows.
///
/// Expected: join rows are gone after delete
#[tokio::test]
async fn delete_removes_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;
    let service = factory::service::create_service(db).await?;
    factory::product::link_service(db, product.id, service.id).await?;

    let repo = ProductRepository::new(db);
    assert!(repo.delete(product.id).await?);

    let links = entity::prelude::ProductService::find()
        .filter(entity::product_service::Column::ProductId.eq(product.id))
        .all(db)
        .await?;
    assert!(links.is_empty());

    Ok(())
}
