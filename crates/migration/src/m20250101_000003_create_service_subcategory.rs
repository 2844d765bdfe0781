//! Create `service_subcategory` table.
//! Subcategories follow their category by name and are dropped with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceSubcategory::Table)
                    .if_not_exists()
                    .col(uuid(ServiceSubcategory::Id).primary_key())
                    .col(string_len(ServiceSubcategory::Name, 128).not_null())
                    .col(string_len(ServiceSubcategory::Slug, 160).not_null())
                    .col(string_len(ServiceSubcategory::CategoryName, 128).not_null())
                    .col(timestamp_with_time_zone(ServiceSubcategory::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServiceSubcategory::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_subcategory_category")
                            .from(ServiceSubcategory::Table, ServiceSubcategory::CategoryName)
                            .to(ServiceCategory::Table, ServiceCategory::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceSubcategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceSubcategory { Table, Id, Name, Slug, CategoryName, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum ServiceCategory { Table, Name }
