use std::io::Write;

use zip::write::SimpleFileOptions;

use super::*;
use crate::server::{
    error::{validation::ValidationError, AppError},
    service::catalog::import::MAX_IMPORT_SIZE_MB,
};

/// Tests the row-level failure policy: one malformed row among valid
/// rows is skipped with a recorded reason while the rest is persisted.
///
/// Expected: success_count = 2, skip_count = 1, one error entry
#[tokio::test]
async fn skips_malformed_rows_and_continues() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let csv = "name,slug,description_short,order,is_active\n\
               Alpha,alpha,First service,1,1\n\
               ,broken,Missing name,2,1\n\
               Beta,beta,Second service,3,1\n";

    let importer = CatalogImporter::new(db, "storage");
    let report = importer
        .import(CatalogKind::Service, "services.csv", Some("text/csv"), csv.as_bytes())
        .await
        .unwrap();

    assert!(report.success);
    assert_eq!(report.success_count, 2);
    assert_eq!(report.skip_count, 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Row 3"));

    assert_eq!(entity::prelude::Service::find().count(db).await.unwrap(), 2);
}

/// Tests the size cap: an oversize upload is rejected before any row
/// processing, reporting the actual size.
///
/// Expected: upload-too-large validation error, nothing persisted
#[tokio::test]
async fn rejects_oversize_uploads_before_processing() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let oversize = vec![b'x'; MAX_IMPORT_SIZE_MB as usize * 1024 * 1024 + 1];

    let importer = CatalogImporter::new(db, "storage");
    let result = importer
        .import(CatalogKind::Service, "big.csv", Some("text/csv"), &oversize)
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::UploadTooLarge { size_mb, limit_mb })) => {
            assert!(size_mb > 100.0);
            assert_eq!(limit_mb, MAX_IMPORT_SIZE_MB);
        }
        other => panic!("expected upload-too-large error, got {:?}", other.map(|r| r.message)),
    }

    assert_eq!(entity::prelude::Service::find().count(db).await.unwrap(), 0);
}

/// Tests the declared-type check.
///
/// Expected: unsupported-type validation error for a .pdf upload
#[tokio::test]
async fn rejects_unsupported_upload_types() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let importer = CatalogImporter::new(db, "storage");
    let result = importer
        .import(CatalogKind::Product, "data.pdf", None, b"%PDF-1.4")
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::UnsupportedUploadType(_)))
    ));
}

/// Tests that a structurally invalid file aborts the whole import.
///
/// Expected: top-level failure for a missing required column
#[tokio::test]
async fn missing_name_column_is_a_top_level_failure() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let csv = "slug,order\nalpha,1\n";

    let importer = CatalogImporter::new(db, "storage");
    let report = importer
        .import(CatalogKind::Product, "products.csv", Some("text/csv"), csv.as_bytes())
        .await
        .unwrap();

    assert!(!report.success);
    assert!(report.message.contains("name"));
    assert_eq!(report.success_count, 0);
}

/// Tests that an unreadable archive aborts the whole import.
///
/// Expected: top-level failure mentioning the archive
#[tokio::test]
async fn corrupt_archive_is_a_top_level_failure() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let importer = CatalogImporter::new(db, "storage");
    let report = importer
        .import(CatalogKind::Product, "broken.zip", None, b"this is not a zip")
        .await
        .unwrap();

    assert!(!report.success);
    assert!(report.message.contains("archive"));
}

/// Tests archive import end to end: the CSV is imported and the media
/// binary is extracted, registered and re-associated by path.
///
/// Expected: service row with its icon wired to the extracted media
#[tokio::test]
async fn imports_archive_with_media() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let storage = tempfile::tempdir().unwrap();

    let csv = "name,slug,icon\nCloud Backup,cloud-backup,icons/star.svg\n";

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("services.csv", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(csv.as_bytes()).unwrap();
    writer
        .start_file("media/icons/star.svg", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<svg/>").unwrap();
    let archive = writer.finish().unwrap().into_inner();

    let importer = CatalogImporter::new(db, storage.path().to_str().unwrap());
    let report = importer
        .import(CatalogKind::Service, "services.zip", Some("application/zip"), &archive)
        .await
        .unwrap();

    assert!(report.success, "unexpected failure: {}", report.message);
    assert_eq!(report.success_count, 1);

    // Binary extracted to storage.
    let extracted = std::fs::read(storage.path().join("icons/star.svg")).unwrap();
    assert_eq!(extracted, b"<svg/>");

    // Media row registered and wired to the imported service.
    let service = crate::server::data::service::ServiceRepository::new(db)
        .find_by_slug("cloud-backup")
        .await
        .unwrap()
        .unwrap();
    let icon_id = service.icon_id.unwrap();
    let media = entity::prelude::Media::find_by_id(icon_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(media.disk, "icons");
    assert_eq!(media.name, "star.svg");
}

/// Tests that an archive without a CSV aborts with a top-level failure.
///
/// Expected: failure message naming the expected file
#[tokio::test]
async fn archive_without_csv_is_a_top_level_failure() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let storage = tempfile::tempdir().unwrap();

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("media/images/logo.png", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"png").unwrap();
    let archive = writer.finish().unwrap().into_inner();

    let importer = CatalogImporter::new(db, storage.path().to_str().unwrap());
    let report = importer
        .import(CatalogKind::Product, "media-only.zip", None, &archive)
        .await
        .unwrap();

    assert!(!report.success);
    assert!(report.message.contains("products.csv"));
}
