use sea_orm::DatabaseConnection;

use crate::{
    model::menu::{MenuDto, MenuItemDto},
    server::{data::menu::MenuRepository, error::AppError},
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the active admin menu entries, ordered by type and order.
    pub async fn get_menu(&self) -> Result<MenuDto, AppError> {
        let repo = MenuRepository::new(self.db);

        let menu = repo
            .get_active_ordered()
            .await?
            .into_iter()
            .map(|item| MenuItemDto {
                id: item.id,
                title: item.title,
                slug: item.slug,
                menu_type: item.menu_type,
                order: item.order,
            })
            .collect();

        Ok(MenuDto { menu })
    }
}
