use sea_orm::entity::prelude::*;

/// Homepage banner slide with call-to-action button configuration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub background_image: Option<String>,
    pub heading_1: Option<String>,
    pub heading_2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_type: Option<String>,
    pub button_value: Option<String>,
    pub height_desktop: Option<i32>,
    pub height_mobile: Option<i32>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
