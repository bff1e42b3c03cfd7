use super::*;

/// Tests the id-to-slug map used by the product export.
///
/// Expected: every requested id mapped, unknown ids absent
#[tokio::test]
async fn maps_ids_to_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::service::ServiceFactory::new(db).slug("alpha").build().await?;
    let second = factory::service::ServiceFactory::new(db).slug("beta").build().await?;

    let repo = ServiceRepository::new(db);
    let map = repo.slug_map(&[first.id, second.id, 9999]).await?;

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&first.id).map(String::as_str), Some("alpha"));
    assert_eq!(map.get(&second.id).map(String::as_str), Some("beta"));

    Ok(())
}

/// Tests the empty-input shortcut.
///
/// Expected: empty map without touching the database
#[tokio::test]
async fn empty_input_yields_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServiceRepository::new(db);

    assert!(repo.slug_map(&[]).await?.is_empty());

    Ok(())
}
