use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banners::Table)
                    .if_not_exists()
                    .col(pk_auto(Banners::Id))
                    .col(string(Banners::Title))
                    .col(string(Banners::Slug))
                    .col(string_null(Banners::BackgroundImage))
                    .col(string_null(Banners::Heading1))
                    .col(string_null(Banners::Heading2))
                    .col(text_null(Banners::Description))
                    .col(string_null(Banners::ButtonText))
                    .col(string_null(Banners::ButtonType))
                    .col(string_null(Banners::ButtonValue))
                    .col(integer_null(Banners::HeightDesktop))
                    .col(integer_null(Banners::HeightMobile))
                    .col(boolean(Banners::IsActive).default(true))
                    .col(integer(Banners::Order).default(0))
                    .col(timestamp_with_time_zone(Banners::CreatedAt))
                    .col(timestamp_with_time_zone(Banners::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banners::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banners {
    Table,
    Id,
    Title,
    Slug,
    BackgroundImage,
    Heading1,
    Heading2,
    Description,
    ButtonText,
    ButtonType,
    ButtonValue,
    HeightDesktop,
    HeightMobile,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}
