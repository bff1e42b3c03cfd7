//! Service factory for creating test service entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test services with customizable fields.
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    description: Option<serde_json::Value>,
    image_id: Option<i32>,
    icon_id: Option<i32>,
    chapter_id: Option<i32>,
    order: i32,
    is_active: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new factory with unique default name and slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Service {}", id),
            slug: format!("service-{}", id),
            description: None,
            image_id: None,
            icon_id: None,
            chapter_id: None,
            order: 0,
            is_active: true,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_string();
        self
    }

    pub fn description(mut self, description: serde_json::Value) -> Self {
        self.description = Some(description);
        self
    }

    pub fn image_id(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }

    pub fn icon_id(mut self, icon_id: i32) -> Self {
        self.icon_id = Some(icon_id);
        self
    }

    pub fn chapter_id(mut self, chapter_id: i32) -> Self {
        self.chapter_id = Some(chapter_id);
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Inserts the configured service.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();

        entity::service::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
            seo_title: ActiveValue::Set(None),
            seo_description: ActiveValue::Set(None),
            seo_keywords: ActiveValue::Set(None),
            image_id: ActiveValue::Set(self.image_id),
            icon_id: ActiveValue::Set(self.icon_id),
            chapter_id: ActiveValue::Set(self.chapter_id),
            order: ActiveValue::Set(self.order),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service with default values.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db).build().await
}
