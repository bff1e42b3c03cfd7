use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeoSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(SeoSettings::Id))
                    .col(string_null(SeoSettings::SiteName))
                    .col(text_null(SeoSettings::SiteDescription))
                    .col(string_null(SeoSettings::SiteKeywords))
                    .col(string_null(SeoSettings::DefaultOgImage))
                    .col(string(SeoSettings::OgType).default("website"))
                    .col(string_null(SeoSettings::OgSiteName))
                    .col(string(SeoSettings::TwitterCard).default("summary_large_image"))
                    .col(string_null(SeoSettings::TwitterSite))
                    .col(string_null(SeoSettings::TwitterCreator))
                    .col(string_null(SeoSettings::OrganizationName))
                    .col(string_null(SeoSettings::OrganizationLogo))
                    .col(string_null(SeoSettings::OrganizationPhone))
                    .col(string_null(SeoSettings::OrganizationEmail))
                    .col(text_null(SeoSettings::OrganizationAddress))
                    .col(boolean(SeoSettings::AllowIndexing).default(true))
                    .col(text_null(SeoSettings::RobotsTxt))
                    .col(json_null(SeoSettings::AdditionalSchema))
                    .col(timestamp_with_time_zone(SeoSettings::CreatedAt))
                    .col(timestamp_with_time_zone(SeoSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeoSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeoSettings {
    Table,
    Id,
    SiteName,
    SiteDescription,
    SiteKeywords,
    DefaultOgImage,
    OgType,
    OgSiteName,
    TwitterCard,
    TwitterSite,
    TwitterCreator,
    OrganizationName,
    OrganizationLogo,
    OrganizationPhone,
    OrganizationEmail,
    OrganizationAddress,
    AllowIndexing,
    RobotsTxt,
    AdditionalSchema,
    CreatedAt,
    UpdatedAt,
}
