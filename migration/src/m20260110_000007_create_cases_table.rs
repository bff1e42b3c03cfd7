use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_chapters_table::Chapters;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cases::Table)
                    .if_not_exists()
                    .col(pk_auto(Cases::Id))
                    .col(string(Cases::Name))
                    .col(string_uniq(Cases::Slug))
                    .col(json_null(Cases::Description))
                    .col(string_null(Cases::SeoTitle))
                    .col(text_null(Cases::SeoDescription))
                    .col(string_null(Cases::SeoKeywords))
                    .col(integer_null(Cases::ChapterId))
                    .col(integer(Cases::Order).default(0))
                    .col(boolean(Cases::IsActive).default(true))
                    .col(timestamp_with_time_zone(Cases::CreatedAt))
                    .col(timestamp_with_time_zone(Cases::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cases_chapter_id")
                            .from(Cases::Table, Cases::ChapterId)
                            .to(Chapters::Table, Chapters::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cases {
    Table,
    Id,
    Name,
    Slug,
    Description,
    SeoTitle,
    SeoDescription,
    SeoKeywords,
    ChapterId,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
