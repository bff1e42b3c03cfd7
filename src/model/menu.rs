use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub menu_type: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub menu: Vec<MenuItemDto>,
}
