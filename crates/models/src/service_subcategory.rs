use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, service_category, slug::slugify};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_subcategory")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(service_category::Entity)
                .from(Column::CategoryName)
                .to(service_category::Column::Name)
                .into(),
        }
    }
}

impl Related<service_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Trim and validate a subcategory name; returns `(name, slug)`.
pub fn validate_name(raw: &str) -> Result<(String, String), errors::ModelError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(errors::ModelError::Validation("name is required".into()));
    }
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(errors::ModelError::Validation("name must contain letters or digits".into()));
    }
    Ok((name.to_string(), slug))
}

pub fn new_active(name: String, slug: String, category_name: String) -> ActiveModel {
    let now = Utc::now().into();
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        slug: Set(slug),
        category_name: Set(category_name),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
