//! Create `service` table.
//!
//! Services point at their category by *name*. The foreign key neither
//! cascades nor updates, so a category rename has to insert the new name,
//! move the services and only then drop the old row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(string_len(Service::Name, 200).not_null())
                    .col(string_len(Service::Slug, 220).not_null())
                    .col(text_null(Service::Description))
                    .col(string_len(Service::CategoryName, 128).not_null())
                    .col(uuid_null(Service::FormId))
                    .col(boolean(Service::IsActive).not_null())
                    .col(json_null(Service::ContentJson))
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_category")
                            .from(Service::Table, Service::CategoryName)
                            .to(ServiceCategory::Table, ServiceCategory::Name)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_form")
                            .from(Service::Table, Service::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
    Name,
    Slug,
    Description,
    CategoryName,
    FormId,
    IsActive,
    ContentJson,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ServiceCategory { Table, Name }

#[derive(DeriveIden)]
enum Form { Table, Id }
