use sea_orm::entity::prelude::*;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{errors, form, service_category, service_price};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Category *name*, not id.
    pub category_name: String,
    pub form_id: Option<Uuid>,
    pub is_active: bool,
    pub content_json: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category, Form, Prices }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(service_category::Entity)
                .from(Column::CategoryName)
                .to(service_category::Column::Name)
                .into(),
            Relation::Form => Entity::belongs_to(form::Entity)
                .from(Column::FormId)
                .to(form::Column::Id)
                .into(),
            Relation::Prices => service_price::Relation::Service.def().rev(),
        }
    }
}

impl Related<service_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<form::Entity> for Entity {
    fn to() -> RelationDef { Relation::Form.def() }
}

impl Related<service_price::Entity> for Entity {
    fn to() -> RelationDef { Relation::Prices.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(raw: &str) -> Result<String, errors::ModelError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(errors::ModelError::Validation("service name is required".into()));
    }
    if name.chars().count() > 200 {
        return Err(errors::ModelError::Validation("service name must be at most 200 characters".into()));
    }
    Ok(name.to_string())
}

/// Content blocks must be a JSON object (`{"sections": [...]}`) when present.
pub fn validate_content(content: &Json) -> Result<(), errors::ModelError> {
    if !content.is_object() {
        return Err(errors::ModelError::Validation("contentJson must be a JSON object".into()));
    }
    Ok(())
}
