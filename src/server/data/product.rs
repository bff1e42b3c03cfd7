use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::catalog::{
    CatalogItemParams, ProductWithRelations, UpdateCatalogItemParams,
};

/// Optional filters for product listings.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub chapter_id: Option<i32>,
    /// `None` keeps both active and inactive rows.
    pub is_active: Option<bool>,
}

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns filtered products ordered by `order`, with media, chapter
    /// and service relations resolved.
    pub async fn get_filtered(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductWithRelations>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Order)
            .order_by_asc(entity::product::Column::Id);

        if let Some(chapter_id) = filter.chapter_id {
            query = query.filter(entity::product::Column::ChapterId.eq(chapter_id));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::product::Column::IsActive.eq(is_active));
        }

        let products = query.all(self.db).await?;

        self.with_relations(products).await
    }

    /// Returns every product with relations resolved (export path).
    pub async fn get_all(&self) -> Result<Vec<ProductWithRelations>, DbErr> {
        self.get_filtered(ProductFilter::default()).await
    }

    /// Returns active products as bare rows (sitemap path).
    pub async fn get_active(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::IsActive.eq(true))
            .order_by_asc(entity::product::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductWithRelations>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![product]).await?.into_iter().next())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ProductWithRelations>, DbErr> {
        let Some(product) = self.find_by_slug(slug).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![product]).await?.into_iter().next())
    }

    /// Finds a bare product row by slug regardless of activity (import
    /// create-or-update key).
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Checks whether a slug is taken by a product other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Product::find().filter(entity::product::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::product::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Largest `order` value within a chapter (or among unchaptered rows).
    pub async fn max_order(&self, chapter_id: Option<i32>) -> Result<Option<i32>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .select_only()
            .column_as(entity::product::Column::Order.max(), "max_order");

        query = match chapter_id {
            Some(id) => query.filter(entity::product::Column::ChapterId.eq(id)),
            None => query.filter(entity::product::Column::ChapterId.is_null()),
        };

        query.into_tuple::<Option<i32>>().one(self.db).await.map(|row| row.flatten())
    }

    /// Inserts a new product. Slug and order must already be resolved.
    pub async fn create(
        &self,
        slug: String,
        order: i32,
        params: CatalogItemParams,
    ) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();

        entity::product::ActiveModel {
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

    /// Applies a partial update to a product.
    pub async fn update(
        &self,
        id: i32,
        slug: Option<String>,
        params: UpdateCatalogItemParams,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = product.into();

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

    /// Replaces the service relation set of a product.
    pub async fn sync_services(&self, product_id: i32, service_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::ProductService::delete_many()
            .filter(entity::product_service::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        let unique: HashSet<i32> = service_ids.iter().copied().collect();
        for service_id in unique {
            entity::product_service::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                service_id: ActiveValue::Set(service_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Deletes a product and its service links; returns false when no row
    /// matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ProductService::delete_many()
            .filter(entity::product_service::Column::ProductId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves media, chapter and service relations for a batch of rows
    /// with one query per related table.
    async fn with_relations(
        &self,
        products: Vec<entity::product::Model>,
    ) -> Result<Vec<ProductWithRelations>, DbErr> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let media_ids: Vec<i32> = products
            .iter()
            .flat_map(|p| [p.image_id, p.icon_id])
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

        let chapter_ids: Vec<i32> = products.iter().filter_map(|p| p.chapter_id).collect();
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

        let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut service_map: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in entity::prelude::ProductService::find()
            .filter(entity::product_service::Column::ProductId.is_in(product_ids))
            .all(self.db)
            .await?
        {
            service_map
                .entry(link.product_id)
                .or_default()
                .push(link.service_id);
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let image = product.image_id.and_then(|id| media_map.get(&id).cloned());
                let icon = product.icon_id.and_then(|id| media_map.get(&id).cloned());
                let chapter = product
                    .chapter_id
                    .and_then(|id| chapter_map.get(&id).cloned());
                let service_ids = service_map.remove(&product.id).unwrap_or_default();

                ProductWithRelations {
                    product,
                    image,
                    icon,
                    chapter,
                    service_ids,
                }
            })
            .collect())
    }
}
