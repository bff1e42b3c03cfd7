use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HowWorkBlockSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(HowWorkBlockSettings::Id))
                    .col(string(HowWorkBlockSettings::Title))
                    .col(text_null(HowWorkBlockSettings::Subtitle))
                    .col(boolean(HowWorkBlockSettings::IsActive).default(true))
                    .col(json_null(HowWorkBlockSettings::Steps))
                    .col(json_null(HowWorkBlockSettings::AdditionalSettings))
                    .col(timestamp_with_time_zone(HowWorkBlockSettings::CreatedAt))
                    .col(timestamp_with_time_zone(HowWorkBlockSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HowWorkBlockSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HowWorkBlockSettings {
    Table,
    Id,
    Title,
    Subtitle,
    IsActive,
    Steps,
    AdditionalSettings,
    CreatedAt,
    UpdatedAt,
}
