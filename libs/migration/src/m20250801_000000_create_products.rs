use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_category enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductCategory::Enum)
                    .values([
                        ProductCategory::Electronics,
                        ProductCategory::Clothing,
                        ProductCategory::Food,
                        ProductCategory::Books,
                        ProductCategory::Home,
                        ProductCategory::Sports,
                        ProductCategory::Other,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(big_integer(Products::Id).auto_increment().primary_key())
                    .col(string(Products::Name))
                    .col(string_len_null(Products::Description, 500))
                    .col(big_integer(Products::PriceCents))
                    .col(integer(Products::Stock).default(0))
                    .col(string_len_null(Products::Sku, 50))
                    .col(
                        ColumnDef::new(Products::Category)
                            .enumeration(
                                ProductCategory::Enum,
                                [
                                    ProductCategory::Electronics,
                                    ProductCategory::Clothing,
                                    ProductCategory::Food,
                                    ProductCategory::Books,
                                    ProductCategory::Home,
                                    ProductCategory::Sports,
                                    ProductCategory::Other,
                                ],
                            )
                            .not_null()
                            .default("other"),
                    )
                    .col(string_null(Products::ImageUrl))
                    .col(boolean(Products::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Secondary key lookups must be fast and unique
        manager
            .create_index(
                Index::create()
                    .name("idx_products_sku")
                    .table(Products::Table)
                    .col(Products::Sku)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_active")
                    .table(Products::Table)
                    .col(Products::Active)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductCategory::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    PriceCents,
    Stock,
    Sku,
    Category,
    ImageUrl,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductCategory {
    #[sea_orm(iden = "product_category")]
    Enum,
    #[sea_orm(iden = "electronics")]
    Electronics,
    #[sea_orm(iden = "clothing")]
    Clothing,
    #[sea_orm(iden = "food")]
    Food,
    #[sea_orm(iden = "books")]
    Books,
    #[sea_orm(iden = "home")]
    Home,
    #[sea_orm(iden = "sports")]
    Sports,
    #[sea_orm(iden = "other")]
    Other,
}
