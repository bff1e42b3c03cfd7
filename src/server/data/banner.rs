use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::banner::{CreateBannerParams, UpdateBannerParams};

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_ordered(&self) -> Result<Vec<entity::banner::Model>, DbErr> {
        entity::prelude::Banner::find()
            .order_by_asc(entity::banner::Column::Order)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::banner::Model>, DbErr> {
        entity::prelude::Banner::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        slug: String,
        params: CreateBannerParams,
    ) -> Result<entity::banner::Model, DbErr> {
        let now = Utc::now();

        entity::banner::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(slug),
            background_image: ActiveValue::Set(params.background_image),
            heading_1: ActiveValue::Set(params.heading_1),
            heading_2: ActiveValue::Set(params.heading_2),
            description: ActiveValue::Set(params.description),
            button_text: ActiveValue::Set(params.button_text),
            button_type: ActiveValue::Set(params.button_type),
            button_value: ActiveValue::Set(params.button_value),
            height_desktop: ActiveValue::Set(params.height_desktop),
            height_mobile: ActiveValue::Set(params.height_mobile),
            is_active: ActiveValue::Set(params.is_active),
            order: ActiveValue::Set(params.order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update to a banner.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBannerParams,
    ) -> Result<Option<entity::banner::Model>, DbErr> {
        let Some(banner) = entity::prelude::Banner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::banner::ActiveModel = banner.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(slug) = params.slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(background_image) = params.background_image {
            active.background_image = ActiveValue::Set(Some(background_image));
        }
        if let Some(heading_1) = params.heading_1 {
            active.heading_1 = ActiveValue::Set(Some(heading_1));
        }
        if let Some(heading_2) = params.heading_2 {
            active.heading_2 = ActiveValue::Set(Some(heading_2));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(button_text) = params.button_text {
            active.button_text = ActiveValue::Set(Some(button_text));
        }
        if let Some(button_type) = params.button_type {
            active.button_type = ActiveValue::Set(Some(button_type));
        }
        if let Some(button_value) = params.button_value {
            active.button_value = ActiveValue::Set(Some(button_value));
        }
        if let Some(height_desktop) = params.height_desktop {
            active.height_desktop = ActiveValue::Set(Some(height_desktop));
        }
        if let Some(height_mobile) = params.height_mobile {
            active.height_mobile = ActiveValue::Set(Some(height_mobile));
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

    /// Deletes a banner; returns false when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
