pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_pages_table;
mod m20260110_000002_create_chapters_table;
mod m20260110_000003_create_media_table;
mod m20260110_000004_create_services_table;
mod m20260110_000005_create_products_table;
mod m20260110_000006_create_product_service_table;
mod m20260110_000007_create_cases_table;
mod m20260110_000008_create_banners_table;
mod m20260110_000009_create_menus_table;
mod m20260111_000010_create_seo_settings_table;
mod m20260111_000011_create_telegram_settings_table;
mod m20260111_000012_create_how_work_block_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_pages_table::Migration),
            Box::new(m20260110_000002_create_chapters_table::Migration),
            Box::new(m20260110_000003_create_media_table::Migration),
            Box::new(m20260110_000004_create_services_table::Migration),
            Box::new(m20260110_000005_create_products_table::Migration),
            Box::new(m20260110_000006_create_product_service_table::Migration),
            Box::new(m20260110_000007_create_cases_table::Migration),
            Box::new(m20260110_000008_create_banners_table::Migration),
            Box::new(m20260110_000009_create_menus_table::Migration),
            Box::new(m20260111_000010_create_seo_settings_table::Migration),
            Box::new(m20260111_000011_create_telegram_settings_table::Migration),
            Box::new(m20260111_000012_create_how_work_block_settings_table::Migration),
        ]
    }
}
