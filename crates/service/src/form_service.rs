use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{form, service};
use crate::errors::ServiceError;

pub const FORM_CONFLICT: &str = "Form with this name already exists";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub form_type: String,
    pub schema_json: Json,
}

/// List forms by name, optionally of one type.
pub async fn list_forms(db: &DatabaseConnection, form_type: Option<&str>) -> Result<Vec<form::Model>, ServiceError> {
    let mut finder = form::Entity::find();
    if let Some(t) = form_type {
        let t = form::validate_form_type(t)?;
        finder = finder.filter(form::Column::FormType.eq(t));
    }
    Ok(finder.order_by_asc(form::Column::Name).all(db).await?)
}

pub async fn get_form(db: &DatabaseConnection, id: Uuid) -> Result<Option<form::Model>, ServiceError> {
    Ok(form::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_form(db: &DatabaseConnection, input: CreateFormInput) -> Result<form::Model, ServiceError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation("form name is required".into()));
    }
    let form_type = form::validate_form_type(&input.form_type)?;
    form::validate_schema(&input.schema_json)?;

    let now = Utc::now().into();
    let am = form::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(input.description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())),
        form_type: Set(form_type),
        schema_json: Set(input.schema_json),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am
        .insert(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(FORM_CONFLICT))?;
    info!(id = %created.id, form_type = %created.form_type, "form_created");
    Ok(created)
}

/// Delete a form; services that used it are detached in the same transaction.
#[instrument(skip(db), fields(form_id = %id))]
pub async fn delete_form(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let detached = db
        .transaction::<_, u64, ServiceError>(|txn| {
            Box::pin(async move {
                let detached = service::Entity::update_many()
                    .col_expr(service::Column::FormId, Expr::value(Option::<Uuid>::None))
                    .filter(service::Column::FormId.eq(id))
                    .exec(txn)
                    .await?
                    .rows_affected;
                let res = form::Entity::delete_by_id(id).exec(txn).await?;
                if res.rows_affected == 0 {
                    return Err(ServiceError::not_found("Form"));
                }
                Ok(detached)
            })
        })
        .await
        .map_err(ServiceError::from_txn)?;
    info!(form_id = %id, detached, "form_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::{create_service, get_service, CreateServiceInput};
    use crate::category_service::create_category;
    use crate::test_support::get_db;
    use serde_json::json;

    fn contact_form(name: &str, form_type: &str) -> CreateFormInput {
        CreateFormInput {
            name: name.into(),
            description: Some("Contact details".into()),
            form_type: form_type.into(),
            schema_json: json!({"fields": [{"type": "email", "name": "email", "label": "Email Address", "required": true}]}),
        }
    }

    #[tokio::test]
    async fn create_list_and_filter_forms() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = create_form(&db, contact_form("Consultation Form", "service_form")).await?;
        assert_eq!(f.form_type, form::SERVICE_FORM);
        create_form(&db, contact_form("Lawyer Signup", "LAWYER_REGISTRATION")).await?;

        assert_eq!(list_forms(&db, None).await?.len(), 2);
        let lawyer = list_forms(&db, Some("lawyer_registration")).await?;
        assert_eq!(lawyer.len(), 1);
        assert_eq!(lawyer[0].name, "Lawyer Signup");
        assert!(list_forms(&db, Some("nope")).await.is_err());

        let dup = create_form(&db, contact_form("Consultation Form", "SERVICE_FORM")).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(ref m)) if m == FORM_CONFLICT));
        Ok(())
    }

    #[tokio::test]
    async fn schema_without_fields_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut bad = contact_form("Broken", "SERVICE_FORM");
        bad.schema_json = json!({"steps": []});
        let err = create_form(&db, bad).await.unwrap_err();
        assert!(err.is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_form_detaches_services() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = create_form(&db, contact_form("Drafting Services Form", "SERVICE_FORM")).await?;
        create_category(&db, "Drafting").await?;
        let s = create_service(&db, CreateServiceInput {
            name: "Last Will".into(),
            slug: None,
            description: None,
            category_name: "Drafting".into(),
            form_id: Some(f.id),
            is_active: None,
            content_json: None,
        }).await?;

        delete_form(&db, f.id).await?;
        assert!(get_form(&db, f.id).await?.is_none());
        let s = get_service(&db, s.id).await?.expect("service kept");
        assert_eq!(s.form_id, None);
        assert!(matches!(delete_form(&db, f.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
