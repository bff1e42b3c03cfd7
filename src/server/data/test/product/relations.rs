use super::*;

/// Tests that media, chapter and service relations are resolved in a
/// listing.
///
/// Expected: image, icon, chapter and service ids attached to the row
#[tokio::test]
async fn resolves_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chapter = factory::chapter::create_chapter(db).await?;
    let image = factory::media::create_media(db).await?;
    let icon = factory::media::create_media(db).await?;
    let service = factory::service::create_service(db).await?;

    let product = factory::product::ProductFactory::new(db)
        .chapter_id(chapter.id)
        .image_id(image.id)
        .icon_id(icon.id)
        .build()
        .await?;
    factory::product::link_service(db, product.id, service.id).await?;

    let repo = ProductRepository::new(db);
    let found = repo.get_by_id(product.id).await?.unwrap();

    assert_eq!(found.image.as_ref().map(|m| m.id), Some(image.id));
    assert_eq!(found.icon.as_ref().map(|m| m.id), Some(icon.id));
    assert_eq!(found.chapter.as_ref().map(|c| c.id), Some(chapter.id));
    assert_eq!(found.service_ids, vec![service.id]);

    Ok(())
}

/// Tests that a product without relations resolves to empty options.
///
/// Expected: all relation fields empty
#[tokio::test]
async fn handles_missing_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let found = repo.get_by_id(product.id).await?.unwrap();

    assert!(found.image.is_none());
    assert!(found.icon.is_none());
    assert!(found.chapter.is_none());
    assert!(found.service_ids.is_empty());

    Ok(())
}
