use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::banner::BannerRepository, model::banner::UpdateBannerParams};

/// Tests a partial banner update.
///
/// Expected: provided fields change, the rest keeps stored values
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = factory::banner::create_banner(db).await?;

    let repo = BannerRepository::new(db);
    let updated = repo
        .update(
            banner.id,
            UpdateBannerParams {
                heading_1: Some("Spring Sale".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.heading_1.as_deref(), Some("Spring Sale"));
    assert!(!updated.is_active);
    assert_eq!(updated.title, banner.title);

    Ok(())
}

/// Tests deleting a banner.
///
/// Expected: true for an existing row, false afterwards
#[tokio::test]
async fn deletes_banner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = factory::banner::create_banner(db).await?;

    let repo = BannerRepository::new(db);

    assert!(repo.delete(banner.id).await?);
    assert!(!repo.delete(banner.id).await?);
    assert!(entity::prelude::Banner::find_by_id(banner.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
