use sea_orm::entity::prelude::*;

/// Stored media file metadata. The binary lives on disk under
/// `<storage root>/<disk>/<name>`; rows are referenced by product and
/// service image/icon columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub original_name: Option<String>,
    pub extension: Option<String>,
    pub disk: String,
    pub size: Option<i64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    #[sea_orm(column_type = "Json", nullable)]
    pub metadata: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    /// Relative path of the binary below the storage root.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.disk, self.name)
    }
}

impl ActiveModelBehavior for ActiveModel {}
