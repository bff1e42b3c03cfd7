use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000004_create_services_table::Services,
    m20260110_000005_create_products_table::Products,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductService::Table)
                    .if_not_exists()
                    .col(integer(ProductService::ProductId))
                    .col(integer(ProductService::ServiceId))
                    .primary_key(
                        Index::create()
                            .col(ProductService::ProductId)
                            .col(ProductService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_service_product_id")
                            .from(ProductService::Table, ProductService::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_service_service_id")
                            .from(ProductService::Table, ProductService::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductService {
    Table,
    ProductId,
    ServiceId,
}
