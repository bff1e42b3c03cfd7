use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::catalog::{
    CatalogItemParams, ServiceWithRelations, UpdateCatalogItemParams,
};

/// Optional filters for service listings.
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub chapter_id: Option<i32>,
    /// `None` keeps both active and inactive rows.
    pub is_active: Option<bool>,
}

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns filtered services ordered by `order`, with media and chapter
    /// relations resolved.
    pub async fn get_filtered(
        &self,
        filter: ServiceFilter,
    ) -> Result<Vec<ServiceWithRelations>, DbErr> {
        let mut query = entity::prelude::Service::find()
            .order_by_asc(entity::service::Column::Order)
            .order_by_asc(entity::service::Column::Id);

        if let Some(chapter_id) = filter.chapter_id {
            query = query.filter(entity::service::Column::ChapterId.eq(chapter_id));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::service::Column::IsActive.eq(is_active));
        }

        let services = query.all(self.db).await?;

        self.with_relations(services).await
    }

    /// Returns every service with relations resolved (export path).
    pub async fn get_all(&self) -> Result<Vec<ServiceWithRelations>, DbErr> {
        self.get_filtered(ServiceFilter::default()).await
    }

    /// Returns active services as bare rows (sitemap path).
    pub async fn get_active(&self) -> Result<Vec<entity::service::Model>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::IsActive.eq(true))
            .order_by_asc(entity::service::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceWithRelations>, DbErr> {
        let Some(service) = entity::prelude::Service::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![service]).await?.into_iter().next())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ServiceWithRelations>, DbErr> {
        let Some(service) = self.find_by_slug(slug).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![service]).await?.into_iter().next())
    }

    /// Finds a bare service row by slug regardless of activity (import
    /// create-or-update key).
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::service::Model>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Checks whether a slug is taken by a service other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Service::find().filter(entity::service::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::service::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Maps service ids to their slugs (product export).
    pub async fn slug_map(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.slug))
            .collect())
    }

    /// Largest `order` value within a chapter (or among unchaptered rows).
    pub async fn max_order(&self, chapter_id: Option<i32>) -> Result<Option<i32>, DbErr> {
        let mut query = entity::prelude::Service::find()
            .select_only()
            .column_as(entity::service::Column::Order.max(), "max_order");

        query = match chapter_id {
            Some(id) => query.filter(entity::service::Column::ChapterId.eq(id)),
            None => query.filter(entity::service::Column::ChapterId.is_null()),
        };

        query.into_tuple::<Option<i32>>().one(self.db).await.map(|row| row.flatten())
    }

    /// Inserts a new service. Slug and order must already be resolved.
    pub async fn create(
        &self,
        slug: String,
        order: i32,
        params: CatalogItemParams,
    ) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();

        entity::service::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description),
            seo_title: ActiveValue::Set(params.seo_title),
            seo_description: ActiveValue::Set(params.seo_description),
            seo_keywords: ActiveValue::Set(params.seo_keywords),
            image_id: ActiveValue::Set(params.image_id),
            icon_id: ActiveValue::Set(params.icon_id),
            chapter_id: ActiveValue::Set(params.chapter_id),
            order: ActiveValue::Set(order),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to a service.
    pub async fn update(
        &self,
        id: i32,
        slug: Option<String>,
        params: UpdateCatalogItemParams,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        let Some(service) = entity::prelude::Service::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::service::ActiveModel = service.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
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
        if let Some(image_id) = params.image_id {
            active.image_id = ActiveValue::Set(Some(image_id));
        }
        if let Some(icon_id) = params.icon_id {
            active.icon_id = ActiveValue::Set(Some(icon_id));
        }
        if let Some(chapter_id) = params.chapter_id {
            active.chapter_id = ActiveValue::Set(Some(chapter_id));
        }
        if let Some(order) = params.order {
            active.order = ActiveValue::Set(order);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a service and its product links; returns false when no row
    /// matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ProductService::delete_many()
            .filter(entity::product_service::Column::ServiceId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves media and chapter relations for a batch of rows with one
    /// query per related table.
    async fn with_relations(
        &self,
        services: Vec<entity::service::Model>,
    ) -> Result<Vec<ServiceWithRelations>, DbErr> {
        if services.is_empty() {
            return Ok(Vec::new());
        }

        let media_ids: Vec<i32> = services
            .iter()
            .flat_map(|s| [s.image_id, s.icon_id])
            .flatten()
            .collect();
        let media_map: HashMap<i32, entity::media::Model> = if media_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Media::find()
                .filter(entity::media::Column::Id.is_in(media_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| (m.id, m))
                .collect()
        };

        let chapter_ids: Vec<i32> = services.iter().filter_map(|s| s.chapter_id).collect();
        let chapter_map: HashMap<i32, entity::chapter::Model> = if chapter_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Chapter::find()
                .filter(entity::chapter::Column::Id.is_in(chapter_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        Ok(services
            .into_iter()
            .map(|service| {
                let image = service.image_id.and_then(|id| media_map.get(&id).cloned());
                let icon = service.icon_id.and_then(|id| media_map.get(&id).cloned());
                let chapter = service
                    .chapter_id
                    .and_then(|id| chapter_map.get(&id).cloned());

                ServiceWithRelations {
                    service,
                    image,
                    icon,
                    chapter,
                }
            })
            .collect())
    }
}
