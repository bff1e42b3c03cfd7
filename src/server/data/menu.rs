use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns active menu entries ordered by type, then `order`.
    pub async fn get_active_ordered(&self) -> Result<Vec<entity::menu::Model>, DbErr> {
        entity::prelude::Menu::find()
            .filter(entity::menu::Column::IsActive.eq(true))
            .order_by_asc(entity::menu::Column::MenuType)
            .order_by_asc(entity::menu::Column::Order)
            .all(self.db)
            .await
    }

    /// Finds a menu entry by slug and type, or seeds it.
    pub async fn first_or_create(
        &self,
        title: &str,
        slug: &str,
        menu_type: &str,
        order: i32,
    ) -> Result<entity::menu::Model, DbErr> {
        let existing = entity::prelude::Menu::find()
            .filter(entity::menu::Column::Slug.eq(slug))
            .filter(entity::menu::Column::MenuType.eq(menu_type))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok(existing);
        }

        let now = Utc::now();

        entity::menu::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            menu_type: ActiveValue::Set(menu_type.to_string()),
            order: ActiveValue::Set(order),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
