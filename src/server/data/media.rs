use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a media row by its disk and file name.
    pub async fn find_by_path(
        &self,
        disk: &str,
        name: &str,
    ) -> Result<Option<entity::media::Model>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::Disk.eq(disk))
            .filter(entity::media::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Finds a media row by path or registers a new one.
    ///
    /// Archive import re-associates extracted binaries through this lookup,
    /// so re-importing the same archive never duplicates media rows.
    pub async fn first_or_create(
        &self,
        disk: &str,
        name: &str,
        size: Option<i64>,
    ) -> Result<entity::media::Model, DbErr> {
        if let Some(existing) = self.find_by_path(disk, name).await? {
            return Ok(existing);
        }

        let now = Utc::now();

        entity::media::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            original_name: ActiveValue::Set(Some(name.to_string())),
            extension: ActiveValue::Set(name.rsplit('.').next().map(str::to_string)),
            disk: ActiveValue::Set(disk.to_string()),
            size: ActiveValue::Set(size),
            width: ActiveValue::Set(None),
            height: ActiveValue::Set(None),
            metadata: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
