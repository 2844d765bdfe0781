use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use common::types::ApiEnvelope;
use models::service_category;
use service::{category_service, errors::ServiceError};

use crate::{errors::JsonApiError, metrics, routes::{parse_id, ServerState}};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CategoryNameBody {
    #[serde(default)]
    pub name: Option<String>,
}

impl CategoryNameBody {
    fn name(&self) -> Result<&str, JsonApiError> {
        match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => Ok(n),
            _ => Err(JsonApiError::bad_request("Category name is required")),
        }
    }
}

fn counted(e: ServiceError) -> JsonApiError {
    if matches!(e, ServiceError::Conflict(_)) {
        metrics::CATEGORY_CONFLICTS_TOTAL.inc();
    }
    e.into()
}

#[utoipa::path(
    get, path = "/api/admin/services/categories", tag = "categories",
    responses((status = 200, description = "All categories ordered by name"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<ApiEnvelope<Vec<service_category::Model>>>, JsonApiError> {
    let rows = category_service::list_categories(&state.db).await?;
    Ok(Json(ApiEnvelope::ok(rows)))
}

#[utoipa::path(
    post, path = "/api/admin/services/categories", tag = "categories",
    request_body = CategoryNameBody,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Name or slug already used")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CategoryNameBody>, JsonRejection>,
) -> Result<Json<ApiEnvelope<service_category::Model>>, JsonApiError> {
    let Json(body) = body?;
    let created = category_service::create_category(&state.db, body.name()?).await?;
    Ok(Json(ApiEnvelope::ok(created)))
}

#[utoipa::path(
    patch, path = "/api/admin/services/categories/{id}", tag = "categories",
    params(("id" = String, Path, description = "Category id")),
    request_body = CategoryNameBody,
    responses(
        (status = 200, description = "Renamed; services now reference the new name"),
        (status = 400, description = "Missing id or empty name"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Name or slug collides with another category"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn rename(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<CategoryNameBody>, JsonRejection>,
) -> Result<Json<ApiEnvelope<service_category::Model>>, JsonApiError> {
    let id = parse_id(&id, "Category")?;
    let Json(body) = body?;
    let renamed = category_service::rename_category(&state.db, id, body.name()?).await.map_err(counted)?;
    metrics::CATEGORY_RENAMES_TOTAL.inc();
    info!(old_id = %id, new_id = %renamed.id, name = %renamed.name, "category rename request served");
    Ok(Json(ApiEnvelope::ok(renamed)))
}

#[utoipa::path(
    delete, path = "/api/admin/services/categories/{id}", tag = "categories",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Missing id"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Services still reference this category"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ApiEnvelope<()>>, JsonApiError> {
    let id = parse_id(&id, "Category")?;
    category_service::delete_category(&state.db, id).await.map_err(counted)?;
    metrics::CATEGORY_DELETES_TOTAL.inc();
    Ok(Json(ApiEnvelope::done()))
}
