//! Chapter factory for creating test chapter entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a chapter with a unique default name.
pub async fn create_chapter(db: &DatabaseConnection) -> Result<entity::chapter::Model, DbErr> {
    create_chapter_named(db, &format!("Chapter {}", next_id())).await
}

/// Creates a chapter with the given name.
pub async fn create_chapter_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::chapter::Model, DbErr> {
    let now = Utc::now();

    entity::chapter::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        order: ActiveValue::Set(0),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
