use crate::db::{connect_with_config, test_connection, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend};
use std::time::{Duration, Instant};
use anyhow::Result;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let start = Instant::now();
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    let connection_time = start.elapsed();

    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    test_connection(&db).await?;

    assert!(connection_time < Duration::from_secs(5),
           "Connection took too long: {:?}", connection_time);
    Ok(())
}

#[test]
fn in_memory_pool_is_pinned_to_one_connection() {
    let cfg = DatabaseConfig::in_memory();
    assert_eq!(cfg.max_connections, 1);
    assert_eq!(cfg.min_connections, 1);
    assert!(cfg.url.starts_with("sqlite:"));
}

#[test]
fn config_durations_follow_file_values() {
    let file = configs::DatabaseConfig {
        url: "postgres://localhost/x".into(),
        connect_timeout_secs: 7,
        acquire_timeout_secs: 3,
        ..Default::default()
    };
    let cfg = DatabaseConfig::from(&file);
    assert_eq!(cfg.connect_timeout, Duration::from_secs(7));
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(3));
    assert_eq!(cfg.max_connections, 10);
}
