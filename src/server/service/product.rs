use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::{ProductFilter, ProductRepository},
    error::{validation::ValidationError, AppError},
    model::catalog::{CatalogItemParams, ProductWithRelations, UpdateCatalogItemParams},
    util::slug::{resolve_unique, slugify},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns filtered products with relations resolved.
    pub async fn get_filtered(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductWithRelations>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_filtered(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductWithRelations>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ProductWithRelations>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_by_slug(slug).await?)
    }

    /// Creates a product with a unique slug and an appended order value,
    /// then replaces its service relation set when one was supplied.
    pub async fn create(
        &self,
        params: CatalogItemParams,
        services: Option<Vec<i32>>,
    ) -> Result<ProductWithRelations, AppError> {
        if params.name.trim().is_empty() {
            return Err(ValidationError::field("name", "Name is required").into());
        }

        let repo = ProductRepository::new(self.db);

        let base = match params.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slugify(&params.name),
        };
        if base.is_empty() {
            return Err(
                ValidationError::field("slug", "A slug could not be derived from the name").into(),
            );
        }

        let slug = resolve_unique(&base, |candidate| {
            let repo = ProductRepository::new(self.db);
            async move { repo.slug_exists(&candidate, None).await }
        })
        .await?;

        let order = match params.order {
            Some(order) => order,
            None => repo.max_order(params.chapter_id).await?.unwrap_or(-1) + 1,
        };

        let product = repo.create(slug, order, params).await?;

        if let Some(service_ids) = services {
            repo.sync_services(product.id, &service_ids).await?;
        }

        repo.get_by_id(product.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found after creation".to_string()))
    }

    /// Applies a partial update. A fresh slug is derived only when the
    /// caller renamed the product without supplying a slug, or supplied a
    /// slug explicitly.
    ///
    /// Returns `None` when the product does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCatalogItemParams,
        services: Option<Vec<i32>>,
    ) -> Result<Option<ProductWithRelations>, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(current) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let current = current.product;

        let base = match (params.slug.as_deref(), params.name.as_deref()) {
            (Some(slug), _) if !slug.trim().is_empty() && slug != current.slug => {
                Some(slug.trim().to_string())
            }
            (None, Some(name)) if name != current.name => Some(slugify(name)),
            _ => None,
        };

        let slug = match base {
            Some(base) if !base.is_empty() => Some(
                resolve_unique(&base, |candidate| {
                    let repo = ProductRepository::new(self.db);
                    async move { repo.slug_exists(&candidate, Some(id)).await }
                })
                .await?,
            ),
            _ => None,
        };

        let updated = repo.update(id, slug, params).await?;
        if updated.is_none() {
            return Ok(None);
        }

        if let Some(service_ids) = services {
            repo.sync_services(id, &service_ids).await?;
        }

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a product; returns false when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
