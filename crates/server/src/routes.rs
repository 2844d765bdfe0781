pub mod categories;
pub mod forms;
pub mod public;
pub mod services;
pub mod subcategories;

use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::openapi::ApiDoc;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is alive", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Path ids are parsed by hand so a malformed id is a 400 with the usual envelope.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, JsonApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(JsonApiError::bad_request(format!("{entity} id is required")));
    }
    Uuid::parse_str(raw).map_err(|_| JsonApiError::bad_request(format!("Invalid {} id", entity.to_lowercase())))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/categories", get(categories::list).post(categories::create))
        .route("/categories/:id", patch(categories::rename).delete(categories::delete))
        .route("/subcategories", get(subcategories::list).post(subcategories::create))
        .route("/subcategories/:id", patch(subcategories::rename).delete(subcategories::delete))
        .route("/", get(services::list).post(services::create))
        .route("/:id", get(services::get).patch(services::update).delete(services::delete))
        .route("/:id/prices", post(services::add_price))
}

/// Build the full application router: admin API, public API, docs, metrics and static files.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    let public_api = Router::new()
        .route("/categories", get(public::categories))
        .route("/:category_slug/:slug", get(public::service_detail));

    let forms = Router::new()
        .route("/", get(forms::list).post(forms::create))
        .route("/:id", get(forms::get).delete(forms::delete));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .nest("/api/admin/services", admin_routes())
        .nest("/api/admin/forms", forms)
        .nest("/api/services", public_api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(metrics::track))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
