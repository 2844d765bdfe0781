use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use common::types::ApiEnvelope;
use models::service_subcategory;
use service::subcategory_service;

use crate::{errors::JsonApiError, routes::{parse_id, ServerState}};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category_name: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubcategoryBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category_name: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RenameSubcategoryBody {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get, path = "/api/admin/services/subcategories", tag = "subcategories",
    params(ListQuery),
    responses((status = 200, description = "Subcategories ordered by name"))
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ApiEnvelope<Vec<service_subcategory::Model>>>, JsonApiError> {
    let Query(q) = query?;
    let filter = q.category_name.as_deref().filter(|c| !c.is_empty());
    let rows = subcategory_service::list_subcategories(&state.db, filter).await?;
    Ok(Json(ApiEnvelope::ok(rows)))
}

#[utoipa::path(
    post, path = "/api/admin/services/subcategories", tag = "subcategories",
    request_body = CreateSubcategoryBody,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "name and categoryName are required"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Duplicate in category")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateSubcategoryBody>, JsonRejection>,
) -> Result<Json<ApiEnvelope<service_subcategory::Model>>, JsonApiError> {
    let Json(body) = body?;
    let created = subcategory_service::create_subcategory(&state.db, &body.name, &body.category_name).await?;
    Ok(Json(ApiEnvelope::ok(created)))
}

#[utoipa::path(
    patch, path = "/api/admin/services/subcategories/{id}", tag = "subcategories",
    params(("id" = String, Path, description = "Subcategory id")),
    request_body = RenameSubcategoryBody,
    responses(
        (status = 200, description = "Renamed"),
        (status = 400, description = "name is required"),
        (status = 404, description = "Subcategory not found"),
        (status = 409, description = "Duplicate subcategory in category")
    )
)]
pub async fn rename(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<RenameSubcategoryBody>, JsonRejection>,
) -> Result<Json<ApiEnvelope<service_subcategory::Model>>, JsonApiError> {
    let id = parse_id(&id, "Subcategory")?;
    let Json(body) = body?;
    if body.name.trim().is_empty() {
        return Err(JsonApiError::bad_request("name is required"));
    }
    let updated = subcategory_service::rename_subcategory(&state.db, id, &body.name).await?;
    Ok(Json(ApiEnvelope::ok(updated)))
}

#[utoipa::path(
    delete, path = "/api/admin/services/subcategories/{id}", tag = "subcategories",
    params(("id" = String, Path, description = "Subcategory id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Subcategory not found"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ApiEnvelope<()>>, JsonApiError> {
    let id = parse_id(&id, "Subcategory")?;
    subcategory_service::delete_subcategory(&state.db, id).await?;
    Ok(Json(ApiEnvelope::done()))
}
