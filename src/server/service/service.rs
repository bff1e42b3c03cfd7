use sea_orm::DatabaseConnection;

use crate::server::{
    data::service::{ServiceFilter, ServiceRepository},
    error::{validation::ValidationError, AppError},
    model::catalog::{CatalogItemParams, ServiceWithRelations, UpdateCatalogItemParams},
    util::slug::{resolve_unique, slugify},
};

pub struct ServiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns filtered services with relations resolved.
    pub async fn get_filtered(
        &self,
        filter: ServiceFilter,
    ) -> Result<Vec<ServiceWithRelations>, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.get_filtered(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceWithRelations>, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ServiceWithRelations>, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.get_by_slug(slug).await?)
    }

    /// Creates a service with a unique slug and an appended order value.
    pub async fn create(
        &self,
        params: CatalogItemParams,
    ) -> Result<ServiceWithRelations, AppError> {
        if params.name.trim().is_empty() {
            return Err(ValidationError::field("name", "Name is required").into());
        }

        let repo = ServiceRepository::new(self.db);

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
            let repo = ServiceRepository::new(self.db);
            async move { repo.slug_exists(&candidate, None).await }
        })
        .await?;

        let order = match params.order {
            Some(order) => order,
            None => repo.max_order(params.chapter_id).await?.unwrap_or(-1) + 1,
        };

        let service = repo.create(slug, order, params).await?;

        repo.get_by_id(service.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found after creation".to_string()))
    }

    /// Applies a partial update. A fresh slug is derived only when the
    /// caller renamed the service without supplying a slug, or supplied a
    /// slug explicitly.
    ///
    /// Returns `None` when the service does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCatalogItemParams,
    ) -> Result<Option<ServiceWithRelations>, AppError> {
        let repo = ServiceRepository::new(self.db);

        let Some(current) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let current = current.service;

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
                    let repo = ServiceRepository::new(self.db);
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

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a service; returns false when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
