use sea_orm::entity::prelude::*;
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{errors, service};

pub const SERVICE_FORM: &str = "SERVICE_FORM";
pub const LAWYER_REGISTRATION: &str = "LAWYER_REGISTRATION";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub form_type: String,
    pub schema_json: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Services }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Services => service::Relation::Form.def().rev(),
        }
    }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Services.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_form_type(t: &str) -> Result<String, errors::ModelError> {
    let up = t.trim().to_ascii_uppercase();
    if up != SERVICE_FORM && up != LAWYER_REGISTRATION {
        return Err(errors::ModelError::Validation("type must be SERVICE_FORM or LAWYER_REGISTRATION".into()));
    }
    Ok(up)
}

/// The schema is stored opaquely; only its outer shape is checked:
/// an object with a `fields` array whose entries carry `name` and `type`.
pub fn validate_schema(schema: &Json) -> Result<(), errors::ModelError> {
    let fields = schema
        .get("fields")
        .and_then(|f| f.as_array())
        .ok_or_else(|| errors::ModelError::Validation("schemaJson must be an object with a fields array".into()))?;
    for (i, field) in fields.iter().enumerate() {
        let has_name = field.get("name").and_then(|v| v.as_str()).is_some_and(|s| !s.is_empty());
        let has_type = field.get("type").and_then(|v| v.as_str()).is_some_and(|s| !s.is_empty());
        if !has_name || !has_type {
            return Err(errors::ModelError::Validation(format!("schemaJson.fields[{i}] needs name and type")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_type_normalized() {
        assert_eq!(validate_form_type("service_form").unwrap(), SERVICE_FORM);
        assert!(validate_form_type("OTHER").is_err());
    }

    #[test]
    fn schema_requires_named_typed_fields() {
        assert!(validate_schema(&json!({"fields": [{"name": "email", "type": "email"}]})).is_ok());
        assert!(validate_schema(&json!({"fields": []})).is_ok());
        assert!(validate_schema(&json!({"fields": [{"type": "text"}]})).is_err());
        assert!(validate_schema(&json!([1, 2])).is_err());
        assert!(validate_schema(&json!({"sections": []})).is_err());
    }
}
