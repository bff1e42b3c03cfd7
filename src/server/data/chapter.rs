use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct ChapterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::chapter::Model>, DbErr> {
        entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Finds a chapter by name or creates it with the given order.
    ///
    /// The sheet ingest calls this once per chapter row; the lookup keeps
    /// repeated ingests from duplicating chapters.
    pub async fn first_or_create(
        &self,
        name: &str,
        order: i32,
    ) -> Result<entity::chapter::Model, DbErr> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        let now = Utc::now();

        entity::chapter::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
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
