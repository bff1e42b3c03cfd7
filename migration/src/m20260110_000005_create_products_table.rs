use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000002_create_chapters_table::Chapters, m20260110_000003_create_media_table::Media,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Name))
                    .col(string_uniq(Products::Slug))
                    .col(json_null(Products::Description))
                    .col(string_null(Products::SeoTitle))
                    .col(text_null(Products::SeoDescription))
                    .col(string_null(Products::SeoKeywords))
                    .col(integer_null(Products::ImageId))
                    .col(integer_null(Products::IconId))
                    .col(integer_null(Products::ChapterId))
                    .col(integer(Products::Order).default(0))
                    .col(boolean(Products::IsActive).default(true))
                    .col(timestamp_with_time_zone(Products::CreatedAt))
                    .col(timestamp_with_time_zone(Products::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_chapter_id")
                            .from(Products::Table, Products::ChapterId)
                            .to(Chapters::Table, Chapters::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_image_id")
                            .from(Products::Table, Products::ImageId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_icon_id")
                            .from(Products::Table, Products::IconId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
    Slug,
    Description,
    SeoTitle,
    SeoDescription,
    SeoKeywords,
    ImageId,
    IconId,
    ChapterId,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
