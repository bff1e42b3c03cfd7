use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::page::{CreatePageParams, UpdatePageParams};

pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every page ordered by `order`, then id.
    pub async fn get_all_ordered(&self) -> Result<Vec<entity::page::Model>, DbErr> {
        entity::prelude::Page::find()
            .order_by_asc(entity::page::Column::Order)
            .order_by_asc(entity::page::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns active pages ordered by `order` (sitemap and public listing).
    pub async fn get_active(&self) -> Result<Vec<entity::page::Model>, DbErr> {
        entity::prelude::Page::find()
            .filter(entity::page::Column::IsActive.eq(true))
            .order_by_asc(entity::page::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::page::Model>, DbErr> {
        entity::prelude::Page::find_by_id(id).one(self.db).await
    }

    /// Finds an active page by its slug (public lookup).
    pub async fn get_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::page::Model>, DbErr> {
        entity::prelude::Page::find()
            .filter(entity::page::Column::Slug.eq(slug))
            .filter(entity::page::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Checks whether a slug is taken by a page other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Page::find().filter(entity::page::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::page::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Inserts a new page. The slug must already be resolved by the caller.
    pub async fn create(
        &self,
        slug: String,
        params: CreatePageParams,
    ) -> Result<entity::page::Model, DbErr> {
        let now = Utc::now();

        entity::page::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(slug),
            content: ActiveValue::Set(params.content),
            seo_title: ActiveValue::Set(params.seo_title),
            seo_description: ActiveValue::Set(params.seo_description),
            seo_keywords: ActiveValue::Set(params.seo_keywords),
            is_active: ActiveValue::Set(params.is_active),
            order: ActiveValue::Set(params.order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to a page.
    ///
    /// `slug` is the resolved replacement slug when the caller requested a
    /// slug change; `None` leaves the stored slug untouched.
    pub async fn update(
        &self,
        id: i32,
        slug: Option<String>,
        params: UpdatePageParams,
    ) -> Result<Option<entity::page::Model>, DbErr> {
        let Some(page) = entity::prelude::Page::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::page::ActiveModel = page.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(slug) = slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(Some(content));
        }
        if let Some(seo_title) = params.seo_title {
            active.seo_title = ActiveValue::Set(Some(seo_title));
        }
        if let Some(seo_description) = params.seo_description {
            active.seo_description = ActiveValue::Set(Some(seo_description));
        }
        if let Some(seo_keywords) = params.seo_keywords {
            active.seo_keywords = ActiveValue::Set(Some(seo_keywords));
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(order) = params.order {
            active.order = ActiveValue::Set(order);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a page; returns false when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Page::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
