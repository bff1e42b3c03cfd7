use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapters::Table)
                    .if_not_exists()
                    .col(pk_auto(Chapters::Id))
                    .col(string(Chapters::Name))
                    .col(integer(Chapters::Order).default(0))
                    .col(boolean(Chapters::IsActive).default(true))
                    .col(timestamp_with_time_zone(Chapters::CreatedAt))
                    .col(timestamp_with_time_zone(Chapters::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapters {
    Table,
    Id,
    Name,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
