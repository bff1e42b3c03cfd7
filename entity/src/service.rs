use sea_orm::entity::prelude::*;

/// Catalog service entry; mirrors the product shape.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub description: Option<Json>,
    pub seo_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub image_id: Option<i32>,
    pub icon_id: Option<i32>,
    pub chapter_id: Option<i32>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Chapter,
    Image,
    Icon,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Chapter => Entity::belongs_to(super::chapter::Entity)
                .from(Column::ChapterId)
                .to(super::chapter::Column::Id)
                .into(),
            Relation::Image => Entity::belongs_to(super::media::Entity)
                .from(Column::ImageId)
                .to(super::media::Column::Id)
                .into(),
            Relation::Icon => Entity::belongs_to(super::media::Entity)
                .from(Column::IconId)
                .to(super::media::Column::Id)
                .into(),
        }
    }
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_service::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_service::Relation::Service.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
