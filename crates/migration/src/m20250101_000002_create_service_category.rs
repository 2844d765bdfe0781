//! Create `service_category` table.
//!
//! `name` is referenced by services and subcategories, so it carries a
//! unique constraint in addition to `slug`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategory::Table)
                    .if_not_exists()
                    .col(uuid(ServiceCategory::Id).primary_key())
                    .col(string_len(ServiceCategory::Name, 128).unique_key().not_null())
                    .col(string_len(ServiceCategory::Slug, 160).unique_key().not_null())
                    .col(timestamp_with_time_zone(ServiceCategory::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServiceCategory::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCategory { Table, Id, Name, Slug, CreatedAt, UpdatedAt }
