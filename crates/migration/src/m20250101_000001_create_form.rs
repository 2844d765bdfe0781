//! Create `form` table.
//!
//! Holds JSON form schemas attached to services and lawyer registration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Form::Table)
                    .if_not_exists()
                    .col(uuid(Form::Id).primary_key())
                    .col(string_len(Form::Name, 128).unique_key().not_null())
                    .col(text_null(Form::Description))
                    .col(string_len(Form::FormType, 32).not_null())
                    .col(json(Form::SchemaJson).not_null())
                    .col(timestamp_with_time_zone(Form::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Form::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Form::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Form { Table, Id, Name, Description, FormType, SchemaJson, CreatedAt, UpdatedAt }
