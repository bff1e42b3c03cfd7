//! Case factory for creating test case entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a case with a unique default name, optionally attached to a
/// chapter.
pub async fn create_case(
    db: &DatabaseConnection,
    chapter_id: Option<i32>,
) -> Result<entity::case::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::case::ActiveModel {
        name: ActiveValue::Set(format!("Case {}", id)),
        slug: ActiveValue::Set(format!("case-{}", id)),
        description: ActiveValue::Set(None),
        seo_title: ActiveValue::Set(None),
        seo_description: ActiveValue::Set(None),
        seo_keywords: ActiveValue::Set(None),
        chapter_id: ActiveValue::Set(chapter_id),
        order: ActiveValue::Set(0),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
