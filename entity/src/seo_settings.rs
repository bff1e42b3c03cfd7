use sea_orm::entity::prelude::*;

/// Site-wide SEO configuration. Exactly one row exists; it is created
/// lazily with defaults on first access and updated in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "seo_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub site_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub site_description: Option<String>,
    pub site_keywords: Option<String>,
    pub default_og_image: Option<String>,
    pub og_type: String,
    pub og_site_name: Option<String>,
    pub twitter_card: String,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub organization_name: Option<String>,
    pub organization_logo: Option<String>,
    pub organization_phone: Option<String>,
    pub organization_email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub organization_address: Option<String>,
    pub allow_indexing: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub robots_txt: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub additional_schema: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
