use sea_orm::{ColumnTrait, QueryFilter};

use super::*;
use crate::server::data::case::CaseRepository;

const SHEET_CSV: &str = "\
service,chapter,case,description,html_text,detailed_text
Web Development,,,Full cycle development,,
,Retail,,,,
,,Shop Audit,Audit description,,
,,Loyalty Program,,,
,Industry,,,,
,,Line Review,,,
Design,,,NaN,,
";

async fn ingest(db: &sea_orm::DatabaseConnection, csv: &str) -> crate::model::catalog::ImportReportDto {
    let importer = CatalogImporter::new(db, "storage");

    importer
        .import(CatalogKind::Service, "feed.csv", Some("text/csv"), csv.as_bytes())
        .await
        .unwrap()
}

/// Tests that a services CSV in the legacy feed layout is routed to the
/// sheet ingest and creates services, chapters and cases.
///
/// Expected: 2 services, 2 chapters, 3 cases
#[tokio::test]
async fn ingests_services_chapters_and_cases() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let report = ingest(db, SHEET_CSV).await;

    assert!(report.success, "unexpected failure: {}", report.message);
    assert_eq!(report.success_count, 7);
    assert!(report.errors.is_empty(), "errors: {:?}", report.errors);

    assert_eq!(entity::prelude::Service::find().count(db).await.unwrap(), 2);
    assert_eq!(entity::prelude::Chapter::find().count(db).await.unwrap(), 2);
    assert_eq!(entity::prelude::Case::find().count(db).await.unwrap(), 3);

    // The NaN artifact is treated as an absent description.
    let design = crate::server::data::service::ServiceRepository::new(db)
        .find_by_slug("design")
        .await
        .unwrap()
        .unwrap();
    assert!(design.description.is_none());
}

/// Tests the fold semantics: cases attach to the nearest preceding
/// chapter and a new chapter resets the case order counter.
///
/// Expected: Retail cases ordered 0 and 1; the Industry case restarts at 0
#[tokio::test]
async fn chapter_rows_reset_the_case_counter() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ingest(db, SHEET_CSV).await;

    let repo = CaseRepository::new(db);

    let shop_audit = repo.find_by_slug("shop-audit").await.unwrap().unwrap();
    let loyalty = repo.find_by_slug("loyalty-program").await.unwrap().unwrap();
    let line_review = repo.find_by_slug("line-review").await.unwrap().unwrap();

    assert_eq!(shop_audit.order, 0);
    assert_eq!(loyalty.order, 1);
    assert_eq!(line_review.order, 0);

    let retail = entity::prelude::Chapter::find()
        .filter(entity::chapter::Column::Name.eq("Retail"))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(shop_audit.chapter_id, Some(retail.id));
    assert_eq!(loyalty.chapter_id, Some(retail.id));
    assert_ne!(line_review.chapter_id, Some(retail.id));
}

/// Tests that a case row before any chapter row is a row-level error.
///
/// Expected: one error entry, nothing attached, processing continues
#[tokio::test]
async fn case_before_chapter_is_a_row_error() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let csv = "\
service,chapter,case,description,html_text,detailed_text
,,Orphan Case,,,
,Retail,,,,
,,Valid Case,,,
";

    let report = ingest(db, csv).await;

    assert!(report.success);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Orphan Case"));
    assert_eq!(entity::prelude::Case::find().count(db).await.unwrap(), 1);
}

/// Tests that re-ingesting the same sheet does not duplicate rows.
///
/// Expected: identical counts after the second ingest
#[tokio::test]
async fn reingest_is_idempotent() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ingest(db, SHEET_CSV).await;
    ingest(db, SHEET_CSV).await;

    assert_eq!(entity::prelude::Service::find().count(db).await.unwrap(), 2);
    assert_eq!(entity::prelude::Chapter::find().count(db).await.unwrap(), 2);
    assert_eq!(entity::prelude::Case::find().count(db).await.unwrap(), 3);
}
