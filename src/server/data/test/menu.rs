use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use crate::server::data::menu::MenuRepository;

/// Tests that seeding the same entry twice keeps a single row.
///
/// Expected: one row per (slug, type) pair
#[tokio::test]
async fn first_or_create_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Menu)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuRepository::new(db);

    let first = repo.first_or_create("Products", "/products", "header", 0).await?;
    let second = repo.first_or_create("Products", "/products", "header", 0).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 1);

    // Same slug under a different menu type is a separate entry.
    repo.first_or_create("Products", "/products", "footer", 0).await?;
    assert_eq!(entity::prelude::Menu::find().count(db).await?, 2);

    Ok(())
}

/// Tests the ordered active listing.
///
/// Expected: entries sorted by type, then order
#[tokio::test]
async fn lists_active_entries_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Menu)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuRepository::new(db);
    repo.first_or_create("Contact", "/contact", "header", 3).await?;
    repo.first_or_create("Home", "/", "header", 0).await?;

    let items = repo.get_active_ordered().await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].slug, "/");
    assert_eq!(items[1].slug, "/contact");

    Ok(())
}
