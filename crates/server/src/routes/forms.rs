use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use common::types::ApiEnvelope;
use models::form;
use service::{
    errors::ServiceError,
    form_service::{self, CreateFormInput},
};

use crate::{errors::JsonApiError, routes::{parse_id, ServerState}};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// `SERVICE_FORM` or `LAWYER_REGISTRATION`
    #[serde(rename = "type")]
    pub form_type: Option<String>,
}

#[utoipa::path(
    get, path = "/api/admin/forms", tag = "forms",
    params(ListQuery),
    responses((status = 200, description = "Forms ordered by name"), (status = 400, description = "Unknown form type"))
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ApiEnvelope<Vec<form::Model>>>, JsonApiError> {
    let Query(q) = query?;
    let rows = form_service::list_forms(&state.db, q.form_type.as_deref().filter(|t| !t.is_empty())).await?;
    Ok(Json(ApiEnvelope::ok(rows)))
}

#[utoipa::path(
    get, path = "/api/admin/forms/{id}", tag = "forms",
    params(("id" = String, Path, description = "Form id")),
    responses((status = 200, description = "Found"), (status = 404, description = "Form not found"))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ApiEnvelope<form::Model>>, JsonApiError> {
    let id = parse_id(&id, "Form")?;
    let found = form_service::get_form(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Form"))?;
    Ok(Json(ApiEnvelope::ok(found)))
}

#[utoipa::path(
    post, path = "/api/admin/forms", tag = "forms",
    request_body = crate::openapi::CreateFormDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Invalid type or schema"),
        (status = 409, description = "Form name already used")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateFormInput>, JsonRejection>,
) -> Result<Json<ApiEnvelope<form::Model>>, JsonApiError> {
    let Json(input) = body?;
    let created = form_service::create_form(&state.db, input).await?;
    Ok(Json(ApiEnvelope::ok(created)))
}

#[utoipa::path(
    delete, path = "/api/admin/forms/{id}", tag = "forms",
    params(("id" = String, Path, description = "Form id")),
    responses((status = 200, description = "Deleted; services detached"), (status = 404, description = "Form not found"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ApiEnvelope<()>>, JsonApiError> {
    let id = parse_id(&id, "Form")?;
    form_service::delete_form(&state.db, id).await?;
    Ok(Json(ApiEnvelope::done()))
}
