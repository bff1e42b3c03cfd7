use std::io::Read;

use super::*;

/// Tests the product CSV export shape.
///
/// Expected: one row per product with flattened description, chapter name
/// and related service slugs
#[tokio::test]
async fn exports_products_as_csv() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chapter = factory::chapter::create_chapter_named(db, "Hardware").await.unwrap();
    let linked = factory::service::ServiceFactory::new(db)
        .slug("installation")
        .build()
        .await
        .unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Widget")
        .slug("widget")
        .chapter_id(chapter.id)
        .description(serde_json::json!({"short": "a widget", "html": "<p>w</p>"}))
        .build()
        .await
        .unwrap();
    factory::product::link_service(db, product.id, linked.id).await.unwrap();

    let exporter = CatalogExporter::new(db, "storage");
    let bytes = exporter.export_csv(CatalogKind::Product).await.unwrap();

    let (headers, rows) = parse_csv(&bytes);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(column(&headers, row, "name"), "Widget");
    assert_eq!(column(&headers, row, "slug"), "widget");
    assert_eq!(column(&headers, row, "description_short"), "a widget");
    assert_eq!(column(&headers, row, "description_html"), "<p>w</p>");
    assert_eq!(column(&headers, row, "chapter"), "Hardware");
    assert_eq!(column(&headers, row, "services"), "installation");
    assert_eq!(column(&headers, row, "is_active"), "1");
}

/// Tests that the service CSV export carries no services column.
///
/// Expected: base headers only
#[tokio::test]
async fn service_export_has_no_services_column() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::service::create_service(db).await.unwrap();

    let exporter = CatalogExporter::new(db, "storage");
    let bytes = exporter.export_csv(CatalogKind::Service).await.unwrap();

    let (headers, rows) = parse_csv(&bytes);
    assert_eq!(rows.len(), 1);
    assert!(!headers.iter().any(|h| h == "services"));
}

/// Tests the ZIP export: CSV plus media binaries addressed by stable
/// relative paths.
///
/// Expected: archive holds products.csv and the referenced image bytes
#[tokio::test]
async fn zip_export_bundles_media() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let storage = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(storage.path().join("images")).unwrap();
    std::fs::write(storage.path().join("images/hero.png"), b"png-bytes").unwrap();

    let image = factory::media::create_media_file(db, "images", "hero.png").await.unwrap();
    factory::product::ProductFactory::new(db)
        .image_id(image.id)
        .build()
        .await
        .unwrap();

    let exporter = CatalogExporter::new(db, storage.path().to_str().unwrap());
    let bytes = exporter.export_zip(CatalogKind::Product).await.unwrap();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

    assert!(archive.by_name("products.csv").is_ok());

    let mut entry = archive.by_name("media/images/hero.png").unwrap();
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();
    assert_eq!(content, b"png-bytes");
}

/// Tests that a media row without a backing file does not break the
/// archive.
///
/// Expected: archive still produced with the CSV inside
#[tokio::test]
async fn zip_export_skips_missing_binaries() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let storage = tempfile::tempdir().unwrap();

    let image = factory::media::create_media_file(db, "images", "ghost.png").await.unwrap();
    factory::product::ProductFactory::new(db)
        .image_id(image.id)
        .build()
        .await
        .unwrap();

    let exporter = CatalogExporter::new(db, storage.path().to_str().unwrap());
    let bytes = exporter.export_zip(CatalogKind::Product).await.unwrap();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert!(archive.by_name("products.csv").is_ok());
    assert_eq!(archive.len(), 1);
}
