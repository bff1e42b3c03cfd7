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
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(string(Services::Name))
                    .col(string_uniq(Services::Slug))
                    .col(json_null(Services::Description))
                    .col(string_null(Services::SeoTitle))
                    .col(text_null(Services::SeoDescription))
                    .col(string_null(Services::SeoKeywords))
                    .col(integer_null(Services::ImageId))
                    .col(integer_null(Services::IconId))
                    .col(integer_null(Services::ChapterId))
                    .col(integer(Services::Order).default(0))
                    .col(boolean(Services::IsActive).default(true))
                    .col(timestamp_with_time_zone(Services::CreatedAt))
                    .col(timestamp_with_time_zone(Services::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_chapter_id")
                            .from(Services::Table, Services::ChapterId)
                            .to(Chapters::Table, Chapters::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_image_id")
                            .from(Services::Table, Services::ImageId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_icon_id")
                            .from(Services::Table, Services::IconId)
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
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Services {
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
