use axum::{
    extract::{Path, State},
    Json,
};

use common::types::ApiEnvelope;
use models::service_category;
use service::{
    catalog_service::{self, ServiceDetail},
    category_service,
    errors::ServiceError,
};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/services/categories", tag = "public",
    responses((status = 200, description = "Categories for navigation"))
)]
pub async fn categories(State(state): State<ServerState>) -> Result<Json<ApiEnvelope<Vec<service_category::Model>>>, JsonApiError> {
    let rows = category_service::list_categories(&state.db).await?;
    Ok(Json(ApiEnvelope::ok(rows)))
}

#[utoipa::path(
    get, path = "/api/services/{category_slug}/{slug}", tag = "public",
    params(
        ("category_slug" = String, Path, description = "Category slug"),
        ("slug" = String, Path, description = "Service slug")
    ),
    responses((status = 200, description = "Active service with category, form and prices"), (status = 404, description = "Service not found"))
)]
pub async fn service_detail(
    State(state): State<ServerState>,
    Path((category_slug, slug)): Path<(String, String)>,
) -> Result<Json<ApiEnvelope<ServiceDetail>>, JsonApiError> {
    let detail = catalog_service::find_active_service(&state.db, &category_slug, &slug)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service"))?;
    Ok(Json(ApiEnvelope::ok(detail)))
}
