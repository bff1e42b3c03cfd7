use super::*;

/// Tests that the sitemap lists static routes and active entities with
/// their last-updated dates.
///
/// Expected: active rows present, inactive rows absent
#[tokio::test]
async fn lists_static_routes_and_active_entities() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db).slug("about-team").build().await.unwrap();
    factory::page::PageFactory::new(db)
        .slug("draft-page")
        .active(false)
        .build()
        .await
        .unwrap();
    factory::product::ProductFactory::new(db).slug("widget").build().await.unwrap();
    factory::service::ServiceFactory::new(db).slug("support").build().await.unwrap();
    factory::case::create_case(db, None).await.unwrap();

    let service = SeoService::new(db, "https://example.com");
    let xml = service.sitemap_xml().await.unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<loc>https://example.com/</loc>"));
    assert!(xml.contains("<loc>https://example.com/products</loc>"));
    assert!(xml.contains("<loc>https://example.com/products/widget</loc>"));
    assert!(xml.contains("<loc>https://example.com/services/support</loc>"));
    assert!(xml.contains("<loc>https://example.com/about-team</loc>"));
    assert!(!xml.contains("draft-page"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
    assert!(xml.contains("<priority>0.8</priority>"));
}

/// Tests that a failing entity group is omitted without failing the
/// response: the cases table simply does not exist in this schema.
///
/// Expected: sitemap renders, other groups present, no cases entries
#[tokio::test]
async fn omits_a_group_whose_query_fails() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Page)
        .with_table(entity::prelude::Chapter)
        .with_table(entity::prelude::Media)
        .with_table(entity::prelude::Service)
        .with_table(entity::prelude::Product)
        .with_table(entity::prelude::ProductService)
        // No cases table: that group's query fails and is swallowed.
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::page::PageFactory::new(db).slug("landing").build().await.unwrap();
    factory::product::ProductFactory::new(db).slug("widget").build().await.unwrap();

    let service = SeoService::new(db, "https://example.com");
    let xml = service.sitemap_xml().await.unwrap();

    assert!(xml.contains("<loc>https://example.com/landing</loc>"));
    assert!(xml.contains("<loc>https://example.com/products/widget</loc>"));
    assert!(!xml.contains("/cases/"));
}
