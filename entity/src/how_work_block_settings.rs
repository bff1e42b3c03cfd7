use sea_orm::entity::prelude::*;

/// "How it works" landing block configuration singleton; `steps` is a JSON
/// array of `{title, description, icon}` objects.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "how_work_block_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub subtitle: Option<String>,
    pub is_active: bool,
    #[sea_orm(column_type = "Json", nullable)]
    pub steps: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub additional_settings: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
