use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::case::CreateCaseParams;

pub struct CaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns active cases ordered by `order` (sitemap path).
    pub async fn get_active(&self) -> Result<Vec<entity::case::Model>, DbErr> {
        entity::prelude::Case::find()
            .filter(entity::case::Column::IsActive.eq(true))
            .order_by_asc(entity::case::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::case::Model>, DbErr> {
        entity::prelude::Case::find()
            .filter(entity::case::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Inserts a new case. The slug must already be resolved by the caller.
    pub async fn create(
        &self,
        slug: String,
        params: CreateCaseParams,
    ) -> Result<entity::case::Model, DbErr> {
        let now = Utc::now();

        entity::case::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description),
            seo_title: ActiveValue::Set(None),
            seo_description: ActiveValue::Set(None),
            seo_keywords: ActiveValue::Set(None),
            chapter_id: ActiveValue::Set(params.chapter_id),
            order: ActiveValue::Set(params.order),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the mutable fields of an existing case (sheet re-ingest).
    pub async fn overwrite(
        &self,
        id: i32,
        params: CreateCaseParams,
    ) -> Result<entity::case::Model, DbErr> {
        let mut active = entity::case::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.chapter_id = ActiveValue::Set(params.chapter_id);
        active.order = ActiveValue::Set(params.order);
        active.is_active = ActiveValue::Set(params.is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
