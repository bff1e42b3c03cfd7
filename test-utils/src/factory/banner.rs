//! Banner factory for creating test banner entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a banner with unique default title and slug.
pub async fn create_banner(db: &DatabaseConnection) -> Result<entity::banner::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::banner::ActiveModel {
        title: ActiveValue::Set(format!("Banner {}", id)),
        slug: ActiveValue::Set(format!("banner-{}", id)),
        background_image: ActiveValue::Set(None),
        heading_1: ActiveValue::Set(None),
        heading_2: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        button_text: ActiveValue::Set(None),
        button_type: ActiveValue::Set(None),
        button_value: ActiveValue::Set(None),
        height_desktop: ActiveValue::Set(None),
        height_mobile: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        order: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
