//! Apply migrations and load the catalog fixtures. Safe to run repeatedly.

use anyhow::Context;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = configs::AppConfig::load_or_env().context("load configuration")?;
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database))
        .await
        .context("connect database")?;

    migration::Migrator::up(&db, None).await.context("run migrations")?;
    let report = service::seed::seed_catalog(&db).await.context("seed catalog")?;

    info!(
        forms = report.forms,
        categories = report.categories,
        services = report.services,
        prices = report.prices,
        "seed finished"
    );
    Ok(())
}
