use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` when present, otherwise `SERVER_HOST`/`SERVER_PORT`/`DATABASE_URL`.
fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

/// Assemble the router around an already connected database.
pub fn app(state: ServerState, static_dir: &str) -> Router {
    routes::build_router(state, build_cors(), static_dir)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    runtime::ensure_env(&cfg.server.static_dir).await;

    let db_cfg = DatabaseConfig::from(&cfg.database);
    let db = connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let app = app(ServerState { db }, &cfg.server.static_dir);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, sqlite = cfg.database.is_sqlite(), "starting legal catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
