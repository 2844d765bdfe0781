use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, service, service_subcategory, slug::slugify};

pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_category")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Services, Subcategories }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Services => service::Relation::Category.def().rev(),
            Relation::Subcategories => service_subcategory::Relation::Category.def().rev(),
        }
    }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Services.def() }
}

impl Related<service_subcategory::Entity> for Entity {
    fn to() -> RelationDef { Relation::Subcategories.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated `(name, slug)` pair for a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryName {
    pub name: String,
    pub slug: String,
}

/// Trim and validate a proposed category name, deriving its slug.
pub fn validate_name(raw: &str) -> Result<CategoryName, errors::ModelError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(errors::ModelError::Validation("Category name is required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("Category name must be at most {NAME_MAX_LEN} characters")));
    }
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(errors::ModelError::Validation("Category name must contain letters or digits".into()));
    }
    Ok(CategoryName { name: name.to_string(), slug })
}

/// Fresh row with a new id and both timestamps set to now.
pub fn new_active(name: &CategoryName) -> ActiveModel {
    let now = Utc::now().into();
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.name.clone()),
        slug: Set(name.slug.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_and_slugs() {
        let n = validate_name("  Document Drafting ").unwrap();
        assert_eq!(n.name, "Document Drafting");
        assert_eq!(n.slug, "document-drafting");
    }

    #[test]
    fn validate_rejects_blank_and_symbol_only() {
        assert!(matches!(validate_name("   "), Err(errors::ModelError::Validation(_))));
        assert!(matches!(validate_name("&&"), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn validate_rejects_overlong() {
        let long = "a".repeat(NAME_MAX_LEN + 1);
        assert!(validate_name(&long).is_err());
    }
}
