use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use common::{pagination::Pagination, types::ApiEnvelope};
use models::{service::Model as ServiceModel, service_price};
use service::{
    catalog_service::{self, AddPriceInput, CreateServiceInput, UpdateServiceInput},
    errors::ServiceError,
};

use crate::{errors::JsonApiError, routes::{parse_id, ServerState}};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category_name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    fn pagination(&self) -> Pagination {
        let d = Pagination::default();
        Pagination { page: self.page.unwrap_or(d.page), per_page: self.per_page.unwrap_or(d.per_page) }
    }
}

#[utoipa::path(
    get, path = "/api/admin/services", tag = "services",
    params(ListQuery),
    responses((status = 200, description = "One page of services ordered by name"))
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ApiEnvelope<Vec<ServiceModel>>>, JsonApiError> {
    let Query(q) = query?;
    let category = q.category_name.as_deref().filter(|c| !c.is_empty());
    let rows = catalog_service::list_services(&state.db, category, q.pagination()).await?;
    Ok(Json(ApiEnvelope::ok(rows)))
}

#[utoipa::path(
    get, path = "/api/admin/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service id")),
    responses((status = 200, description = "Found"), (status = 404, description = "Service not found"))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ApiEnvelope<ServiceModel>>, JsonApiError> {
    let id = parse_id(&id, "Service")?;
    let found = catalog_service::get_service(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service"))?;
    Ok(Json(ApiEnvelope::ok(found)))
}

#[utoipa::path(
    post, path = "/api/admin/services", tag = "services",
    request_body = crate::openapi::CreateServiceDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Category or form not found"),
        (status = 409, description = "Duplicate service in category")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateServiceInput>, JsonRejection>,
) -> Result<Json<ApiEnvelope<ServiceModel>>, JsonApiError> {
    let Json(input) = body?;
    let created = catalog_service::create_service(&state.db, input).await?;
    Ok(Json(ApiEnvelope::ok(created)))
}

#[utoipa::path(
    patch, path = "/api/admin/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service id")),
    request_body = crate::openapi::UpdateServiceDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Service, category or form not found"),
        (status = 409, description = "Duplicate service in category")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateServiceInput>, JsonRejection>,
) -> Result<Json<ApiEnvelope<ServiceModel>>, JsonApiError> {
    let id = parse_id(&id, "Service")?;
    let Json(input) = body?;
    let updated = catalog_service::update_service(&state.db, id, input).await?;
    Ok(Json(ApiEnvelope::ok(updated)))
}

#[utoipa::path(
    delete, path = "/api/admin/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service id")),
    responses((status = 200, description = "Deleted with its prices"), (status = 404, description = "Service not found"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ApiEnvelope<()>>, JsonApiError> {
    let id = parse_id(&id, "Service")?;
    catalog_service::delete_service(&state.db, id).await?;
    Ok(Json(ApiEnvelope::done()))
}

#[utoipa::path(
    post, path = "/api/admin/services/{id}/prices", tag = "services",
    params(("id" = String, Path, description = "Service id")),
    request_body = crate::openapi::AddPriceDoc,
    responses(
        (status = 200, description = "Price added"),
        (status = 400, description = "Invalid amounts"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn add_price(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<AddPriceInput>, JsonRejection>,
) -> Result<Json<ApiEnvelope<service_price::Model>>, JsonApiError> {
    let id = parse_id(&id, "Service")?;
    let Json(input) = body?;
    let price = catalog_service::add_price(&state.db, id, input).await?;
    Ok(Json(ApiEnvelope::ok(price)))
}
