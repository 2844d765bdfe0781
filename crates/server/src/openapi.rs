use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDoc {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_name: String,
    pub form_id: Option<Uuid>,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub content_json: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_name: Option<String>,
    /// `null` detaches the form
    pub form_id: Option<Uuid>,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub content_json: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPriceDoc {
    pub name: String,
    /// minor units (paisa)
    pub price: i32,
    pub discount_amount: i32,
    pub is_compulsory: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormDoc {
    pub name: String,
    pub description: Option<String>,
    /// `SERVICE_FORM` or `LAWYER_REGISTRATION`
    #[serde(rename = "type")]
    pub form_type: String,
    #[schema(value_type = Object)]
    pub schema_json: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::create,
        crate::routes::categories::rename,
        crate::routes::categories::delete,
        crate::routes::subcategories::list,
        crate::routes::subcategories::create,
        crate::routes::subcategories::rename,
        crate::routes::subcategories::delete,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::services::add_price,
        crate::routes::forms::list,
        crate::routes::forms::get,
        crate::routes::forms::create,
        crate::routes::forms::delete,
        crate::routes::public::categories,
        crate::routes::public::service_detail,
    ),
    components(
        schemas(
            HealthResponse,
            CreateServiceDoc,
            UpdateServiceDoc,
            AddPriceDoc,
            CreateFormDoc,
            crate::routes::categories::CategoryNameBody,
            crate::routes::subcategories::CreateSubcategoryBody,
            crate::routes::subcategories::RenameSubcategoryBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "subcategories"),
        (name = "services"),
        (name = "forms"),
        (name = "public")
    )
)]
pub struct ApiDoc;
