//! Media factory for creating test media rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a media row with a unique default file name on the `images`
/// disk. The binary itself is not written; tests that exercise archive
/// export create the file under their own storage root.
pub async fn create_media(db: &DatabaseConnection) -> Result<entity::media::Model, DbErr> {
    create_media_file(db, "images", &format!("image-{}.png", next_id())).await
}

/// Creates a media row for the given disk and file name.
pub async fn create_media_file(
    db: &DatabaseConnection,
    disk: &str,
    name: &str,
) -> Result<entity::media::Model, DbErr> {
    let now = Utc::now();

    entity::media::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        original_name: ActiveValue::Set(Some(name.to_string())),
        extension: ActiveValue::Set(name.rsplit('.').next().map(|e| e.to_string())),
        disk: ActiveValue::Set(disk.to_string()),
        size: ActiveValue::Set(None),
        width: ActiveValue::Set(None),
        height: ActiveValue::Set(None),
        metadata: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
