use sea_orm::QueryOrder;

use super::*;

/// Tests export → import → import idempotence for products.
///
/// Expected: row counts, field values and relations unchanged after two
/// re-imports of the exported file
#[tokio::test]
async fn product_roundtrip_is_idempotent() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chapter = factory::chapter::create_chapter_named(db, "Consulting").await.unwrap();
    let service = factory::service::ServiceFactory::new(db)
        .slug("support")
        .build()
        .await
        .unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Analytics Suite")
        .slug("analytics-suite")
        .chapter_id(chapter.id)
        .description(serde_json::json!({"short": "dashboards", "detailed": "long text"}))
        .order(2)
        .build()
        .await
        .unwrap();
    factory::product::link_service(db, product.id, service.id).await.unwrap();

    let exporter = CatalogExporter::new(db, "storage");
    let bytes = exporter.export_csv(CatalogKind::Product).await.unwrap();

    let importer = CatalogImporter::new(db, "storage");
    for _ in 0..2 {
        let report = importer
            .import(CatalogKind::Product, "products.csv", Some("text/csv"), &bytes)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.skip_count, 0);
    }

    // Still exactly one product, unchanged.
    let products = entity::prelude::Product::find().all(db).await.unwrap();
    assert_eq!(products.len(), 1);

    let stored = &products[0];
    assert_eq!(stored.id, product.id);
    assert_eq!(stored.name, "Analytics Suite");
    assert_eq!(stored.slug, "analytics-suite");
    assert_eq!(stored.chapter_id, Some(chapter.id));
    assert_eq!(stored.order, 2);
    assert_eq!(
        stored.description,
        Some(serde_json::json!({"short": "dashboards", "detailed": "long text"}))
    );

    // Relation survived, no duplicates.
    let links = entity::prelude::ProductService::find().all(db).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].service_id, service.id);

    // No extra chapters were invented.
    assert_eq!(entity::prelude::Chapter::find().count(db).await.unwrap(), 1);
}

/// Tests export → import idempotence for services, including inactive
/// rows.
///
/// Expected: counts and activity flags unchanged
#[tokio::test]
async fn service_roundtrip_preserves_activity() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::service::ServiceFactory::new(db)
        .name("Active One")
        .slug("active-one")
        .build()
        .await
        .unwrap();
    factory::service::ServiceFactory::new(db)
        .name("Retired One")
        .slug("retired-one")
        .active(false)
        .build()
        .await
        .unwrap();

    let exporter = CatalogExporter::new(db, "storage");
    let bytes = exporter.export_csv(CatalogKind::Service).await.unwrap();

    let importer = CatalogImporter::new(db, "storage");
    let report = importer
        .import(CatalogKind::Service, "services.csv", Some("text/csv"), &bytes)
        .await
        .unwrap();

    assert!(report.success);
    assert_eq!(report.success_count, 2);

    let services = entity::prelude::Service::find()
        .order_by_asc(entity::service::Column::Id)
        .all(db)
        .await
        .unwrap();
    assert_eq!(services.len(), 2);
    assert!(services[0].is_active);
    assert!(!services[1].is_active);
}
