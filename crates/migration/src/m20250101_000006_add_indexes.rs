use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Subcategory: unique name and slug within a category
        manager
            .create_index(
                Index::create()
                    .name("uniq_subcategory_category_name")
                    .table(ServiceSubcategory::Table)
                    .col(ServiceSubcategory::CategoryName)
                    .col(ServiceSubcategory::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uniq_subcategory_category_slug")
                    .table(ServiceSubcategory::Table)
                    .col(ServiceSubcategory::CategoryName)
                    .col(ServiceSubcategory::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Service: composite unique (name, category_name) used by the seed upsert
        manager
            .create_index(
                Index::create()
                    .name("uniq_service_name_category")
                    .table(Service::Table)
                    .col(Service::Name)
                    .col(Service::CategoryName)
                    .unique()
                    .to_owned(),
            )
            .await?;
        // Public detail pages resolve (category, slug)
        manager
            .create_index(
                Index::create()
                    .name("uniq_service_category_slug")
                    .table(Service::Table)
                    .col(Service::CategoryName)
                    .col(Service::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Price: index on service_id
        manager
            .create_index(
                Index::create()
                    .name("idx_service_price_service")
                    .table(ServicePrice::Table)
                    .col(ServicePrice::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_subcategory_category_name").table(ServiceSubcategory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_subcategory_category_slug").table(ServiceSubcategory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_service_name_category").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_service_category_slug").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_price_service").table(ServicePrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceSubcategory { Table, CategoryName, Name, Slug }

#[derive(DeriveIden)]
enum Service { Table, Name, CategoryName, Slug }

#[derive(DeriveIden)]
enum ServicePrice { Table, ServiceId }
