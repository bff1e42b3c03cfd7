use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(pk_auto(Menus::Id))
                    .col(string(Menus::Title))
                    .col(string(Menus::Slug))
                    .col(string(Menus::Type))
                    .col(integer(Menus::Order).default(0))
                    .col(boolean(Menus::IsActive).default(true))
                    .col(timestamp_with_time_zone(Menus::CreatedAt))
                    .col(timestamp_with_time_zone(Menus::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menus {
    Table,
    Id,
    Title,
    Slug,
    Type,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
