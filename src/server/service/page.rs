use sea_orm::DatabaseConnection;

use crate::{
    model::page::{CheckSlugDto, SlugAvailabilityDto},
    server::{
        data::page::PageRepository,
        error::{validation::ValidationError, AppError},
        model::page::{CreatePageParams, UpdatePageParams},
        util::slug::{is_reserved, resolve_unique, slugify},
    },
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every page ordered for the admin listing.
    pub async fn get_all(&self) -> Result<Vec<entity::page::Model>, AppError> {
        let repo = PageRepository::new(self.db);

        Ok(repo.get_all_ordered().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::page::Model>, AppError> {
        let repo = PageRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Public lookup of an active page by slug.
    pub async fn get_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::page::Model>, AppError> {
        let repo = PageRepository::new(self.db);

        Ok(repo.get_active_by_slug(slug).await?)
    }

    /// Creates a page, deriving and de-duplicating the slug.
    ///
    /// A requested or derived slug that matches a reserved route is
    /// rejected outright; collisions with existing pages are resolved by
    /// integer suffixing.
    pub async fn create(&self, params: CreatePageParams) -> Result<entity::page::Model, AppError> {
        if params.title.trim().is_empty() {
            return Err(ValidationError::field("title", "Title is required").into());
        }

        let base = match params.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slugify(&params.title),
        };

        if base.is_empty() {
            return Err(
                ValidationError::field("slug", "A slug could not be derived from the title").into(),
            );
        }

        if is_reserved(&base) {
            return Err(ValidationError::ReservedPath(base).into());
        }

        let repo = PageRepository::new(self.db);
        let slug = resolve_unique(&base, |candidate| {
            let repo = PageRepository::new(self.db);
            async move { repo.slug_exists(&candidate, None).await }
        })
        .await?;

        Ok(repo.create(slug, params).await?)
    }

    /// Applies a partial update, re-resolving the slug only when the caller
    /// supplied one.
    ///
    /// Returns `None` when the page does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePageParams,
    ) -> Result<Option<entity::page::Model>, AppError> {
        let repo = PageRepository::new(self.db);

        let Some(current) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let slug = match params.slug.as_deref() {
            Some(requested) if !requested.trim().is_empty() && requested != current.slug => {
                let requested = requested.trim().to_string();

                if is_reserved(&requested) {
                    return Err(ValidationError::ReservedPath(requested).into());
                }

                Some(
                    resolve_unique(&requested, |candidate| {
                        let repo = PageRepository::new(self.db);
                        async move { repo.slug_exists(&candidate, Some(id)).await }
                    })
                    .await?,
                )
            }
            _ => None,
        };

        Ok(repo.update(id, slug, params).await?)
    }

    /// Deletes a page; returns false when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PageRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }

    /// Probes slug availability for the admin form.
    ///
    /// A taken or reserved slug comes back unavailable together with the
    /// first free, non-reserved suffixed suggestion.
    pub async fn check_slug(&self, dto: CheckSlugDto) -> Result<SlugAvailabilityDto, AppError> {
        let slug = dto.slug.trim().to_string();

        if slug.is_empty() {
            return Err(ValidationError::field("slug", "Slug is required").into());
        }

        let repo = PageRepository::new(self.db);
        let exists = repo.slug_exists(&slug, dto.exclude_id).await?;
        let reserved = is_reserved(&slug);

        if !exists && !reserved {
            return Ok(SlugAvailabilityDto {
                available: true,
                message: "Slug is available".to_string(),
                suggested_slug: None,
            });
        }

        // Suggest the first candidate that is neither taken nor reserved.
        let suggested = resolve_unique(&slug, |candidate| {
            let repo = PageRepository::new(self.db);
            async move {
                if is_reserved(&candidate) {
                    return Ok(true);
                }
                repo.slug_exists(&candidate, dto.exclude_id).await
            }
        })
        .await?;

        Ok(SlugAvailabilityDto {
            available: false,
            message: if exists {
                "A page with this slug already exists".to_string()
            } else {
                "This slug is reserved by the application".to_string()
            },
            suggested_slug: Some(suggested),
        })
    }
}
