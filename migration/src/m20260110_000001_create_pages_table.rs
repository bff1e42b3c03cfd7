use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(pk_auto(Pages::Id))
                    .col(string(Pages::Title))
                    .col(string_uniq(Pages::Slug))
                    .col(text_null(Pages::Content))
                    .col(string_null(Pages::SeoTitle))
                    .col(text_null(Pages::SeoDescription))
                    .col(string_null(Pages::SeoKeywords))
                    .col(boolean(Pages::IsActive).default(true))
                    .col(integer(Pages::Order).default(0))
                    .col(timestamp_with_time_zone(Pages::CreatedAt))
                    .col(timestamp_with_time_zone(Pages::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pages {
    Table,
    Id,
    Title,
    Slug,
    Content,
    SeoTitle,
    SeoDescription,
    SeoKeywords,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}
