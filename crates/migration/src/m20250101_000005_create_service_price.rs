//! Create `service_price` table. Amounts are integer paisa.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServicePrice::Table)
                    .if_not_exists()
                    .col(uuid(ServicePrice::Id).primary_key())
                    .col(uuid(ServicePrice::ServiceId).not_null())
                    .col(string_len(ServicePrice::Name, 128).not_null())
                    .col(integer(ServicePrice::Price).not_null())
                    .col(integer(ServicePrice::DiscountAmount).not_null())
                    .col(boolean(ServicePrice::IsCompulsory).not_null())
                    .col(timestamp_with_time_zone(ServicePrice::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServicePrice::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_price_service")
                            .from(ServicePrice::Table, ServicePrice::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServicePrice::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServicePrice {
    Table,
    Id,
    ServiceId,
    Name,
    Price,
    DiscountAmount,
    IsCompulsory,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Service { Table, Id }
