use super::*;

/// Tests slug derivation from the title.
///
/// Expected: lowercase hyphenated slug
#[tokio::test]
async fn derives_slug_from_title() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);
    let page = service
        .create(create_params("Our Great Team!", None))
        .await
        .unwrap();

    assert_eq!(page.slug, "our-great-team");
}

/// Tests slug derivation from a Cyrillic title.
///
/// Expected: transliterated lowercase ASCII slug
#[tokio::test]
async fn transliterates_cyrillic_titles() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);
    let page = service
        .create(create_params("О компании", None))
        .await
        .unwrap();

    assert_eq!(page.slug, "o-kompanii");
}

/// Tests that creating two pages with the same name yields distinct
/// slugs.
///
/// Expected: `foo`, then `foo-1`
#[tokio::test]
async fn suffixes_colliding_slugs() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);

    let first = service.create(create_params("Foo", None)).await.unwrap();
    let second = service.create(create_params("Foo", None)).await.unwrap();

    assert_eq!(first.slug, "foo");
    assert_eq!(second.slug, "foo-1");
}

/// Tests that a reserved slug is rejected, not silently renamed.
///
/// Expected: reserved-path validation error, no row created
#[tokio::test]
async fn rejects_reserved_slugs() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);

    let result = service.create(create_params("Products", None)).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ReservedPath(ref slug))) if slug == "products"
    ));

    assert!(service.get_all().await.unwrap().is_empty());
}

/// Tests that an explicit reserved slug override is rejected too.
///
/// Expected: reserved-path validation error
#[tokio::test]
async fn rejects_reserved_slug_override() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);

    let result = service
        .create(create_params("Totally Fine Title", Some("admin")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ReservedPath(_)))
    ));
}

/// Tests the empty-title validation.
///
/// Expected: field-level validation error
#[tokio::test]
async fn rejects_empty_title() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PageService::new(db);

    let result = service.create(create_params("   ", None)).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Fields(_)))
    ));
}
