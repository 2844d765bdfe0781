//! Service catalog: purchasable services, their prices and the public
//! `(category slug, service slug)` lookup.

use chrono::Utc;
use sea_orm::{
    prelude::Json, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use common::pagination::Pagination;
use models::{form, service, service_category, service_price, slug::slugify};
use crate::errors::ServiceError;

pub const SERVICE_CONFLICT: &str = "Service with same name or slug exists in category";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceInput {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub category_name: String,
    #[serde(default)]
    pub form_id: Option<Uuid>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub content_json: Option<Json>,
}

/// Partial update. `formId: null` detaches the form, an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub form_id: Option<Option<Uuid>>,
    pub is_active: Option<bool>,
    pub content_json: Option<Json>,
}

fn double_option<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPriceInput {
    pub name: String,
    pub price: i32,
    #[serde(default)]
    pub discount_amount: i32,
    #[serde(default)]
    pub is_compulsory: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Everything a public service page needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: service::Model,
    pub category: service_category::Model,
    pub form: Option<FormSummary>,
    pub price: Vec<service_price::Model>,
}

async fn require_category(db: &DatabaseConnection, name: &str) -> Result<(), ServiceError> {
    let found = service_category::Entity::find()
        .filter(service_category::Column::Name.eq(name))
        .one(db)
        .await?;
    found.map(|_| ()).ok_or_else(|| ServiceError::not_found("Category"))
}

async fn require_form(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    form::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found("Form"))
}

/// List services ordered by name, optionally within one category.
pub async fn list_services(db: &DatabaseConnection, category_name: Option<&str>, opts: Pagination) -> Result<Vec<service::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let mut finder = service::Entity::find();
    if let Some(name) = category_name {
        finder = finder.filter(service::Column::CategoryName.eq(name));
    }
    let rows = finder
        .order_by_asc(service::Column::Name)
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await?;
    Ok(rows)
}

/// Get service by id.
pub async fn get_service(db: &DatabaseConnection, id: Uuid) -> Result<Option<service::Model>, ServiceError> {
    Ok(service::Entity::find_by_id(id).one(db).await?)
}

/// Create a service under an existing category.
#[instrument(skip(db, input), fields(name = %input.name, category = %input.category_name))]
pub async fn create_service(db: &DatabaseConnection, input: CreateServiceInput) -> Result<service::Model, ServiceError> {
    let name = service::validate_name(&input.name)?;
    let slug = slugify(input.slug.as_deref().unwrap_or(&name));
    if slug.is_empty() {
        return Err(ServiceError::Validation("service slug must contain letters or digits".into()));
    }
    let category_name = input.category_name.trim().to_string();
    require_category(db, &category_name).await?;
    if let Some(form_id) = input.form_id {
        require_form(db, form_id).await?;
    }
    if let Some(content) = &input.content_json {
        service::validate_content(content)?;
    }

    let now = Utc::now().into();
    let am = service::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        slug: Set(slug),
        description: Set(input.description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())),
        category_name: Set(category_name),
        form_id: Set(input.form_id),
        is_active: Set(input.is_active.unwrap_or(true)),
        content_json: Set(input.content_json),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(SERVICE_CONFLICT))?;
    info!(id = %created.id, slug = %created.slug, "service_created");
    Ok(created)
}

/// Update service with optional fields and validations.
#[instrument(skip(db, input), fields(service_id = %id))]
pub async fn update_service(db: &DatabaseConnection, id: Uuid, input: UpdateServiceInput) -> Result<service::Model, ServiceError> {
    let existing = get_service(db, id).await?.ok_or_else(|| ServiceError::not_found("Service"))?;
    let mut am: service::ActiveModel = existing.into();

    if let Some(n) = input.name.as_deref() {
        let name = service::validate_name(n)?;
        am.slug = Set(slugify(&name));
        am.name = Set(name);
    }
    if let Some(d) = input.description {
        let d = d.trim().to_string();
        am.description = Set(if d.is_empty() { None } else { Some(d) });
    }
    if let Some(c) = input.category_name.as_deref() {
        let c = c.trim();
        require_category(db, c).await?;
        am.category_name = Set(c.to_string());
    }
    if let Some(form_id) = input.form_id {
        if let Some(fid) = form_id {
            require_form(db, fid).await?;
        }
        am.form_id = Set(form_id);
    }
    if let Some(active) = input.is_active {
        am.is_active = Set(active);
    }
    if let Some(content) = input.content_json {
        service::validate_content(&content)?;
        am.content_json = Set(Some(content));
    }
    am.updated_at = Set(Utc::now().into());

    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(SERVICE_CONFLICT))?;
    info!(id = %updated.id, "service_updated");
    Ok(updated)
}

/// Delete a service; its prices cascade.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = service::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Service"));
    }
    info!(service_id = %id, "service_deleted");
    Ok(())
}

/// Attach a price package to a service.
pub async fn add_price(db: &DatabaseConnection, service_id: Uuid, input: AddPriceInput) -> Result<service_price::Model, ServiceError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation("price name is required".into()));
    }
    service_price::validate_amounts(input.price, input.discount_amount)?;
    if get_service(db, service_id).await?.is_none() {
        return Err(ServiceError::not_found("Service"));
    }
    let now = Utc::now().into();
    let am = service_price::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(service_id),
        name: Set(name.to_string()),
        price: Set(input.price),
        discount_amount: Set(input.discount_amount),
        is_compulsory: Set(input.is_compulsory),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Resolve an active service by category slug and service slug.
pub async fn find_active_service(db: &DatabaseConnection, category_slug: &str, slug: &str) -> Result<Option<ServiceDetail>, ServiceError> {
    let Some(category) = crate::category_service::get_category_by_slug(db, category_slug).await? else {
        return Ok(None);
    };
    let found = service::Entity::find()
        .filter(service::Column::CategoryName.eq(category.name.as_str()))
        .filter(service::Column::Slug.eq(slug))
        .filter(service::Column::IsActive.eq(true))
        .one(db)
        .await?;
    let Some(svc) = found else { return Ok(None); };

    let form = svc
        .find_related(form::Entity)
        .one(db)
        .await?
        .map(|f| FormSummary { id: f.id, name: f.name, description: f.description });
    let price = svc
        .find_related(service_price::Entity)
        .order_by_asc(service_price::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(Some(ServiceDetail { service: svc, category, form, price }))
}
