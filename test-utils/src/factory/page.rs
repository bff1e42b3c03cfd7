//! Page factory for creating test page entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pages with customizable fields.
///
/// Provides a builder pattern with default values that can be overridden
/// for specific test scenarios.
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    content: Option<String>,
    is_active: bool,
    order: i32,
}

impl<'a> PageFactory<'a> {
    /// Creates a new factory with unique default title and slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Page {}", id),
            slug: format!("page-{}", id),
            content: None,
            is_active: true,
            order: 0,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Inserts the configured page.
    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let now = Utc::now();

        entity::page::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(self.content),
            seo_title: ActiveValue::Set(None),
            seo_description: ActiveValue::Set(None),
            seo_keywords: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            order: ActiveValue::Set(self.order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a page with default values.
pub async fn create_page(db: &DatabaseConnection) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db).build().await
}
