//! Migrator registering catalog migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_form;
mod m20250101_000002_create_service_category;
mod m20250101_000003_create_service_subcategory;
mod m20250101_000004_create_service;
mod m20250101_000005_create_service_price;
mod m20250101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_form::Migration),
            Box::new(m20250101_000002_create_service_category::Migration),
            Box::new(m20250101_000003_create_service_subcategory::Migration),
            Box::new(m20250101_000004_create_service::Migration),
            Box::new(m20250101_000005_create_service_price::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000006_add_indexes::Migration),
        ]
    }
}
