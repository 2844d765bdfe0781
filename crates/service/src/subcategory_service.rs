use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, instrument};
use uuid::Uuid;

use models::{service_category, service_subcategory};
use crate::errors::ServiceError;

pub const SUBCATEGORY_CONFLICT: &str = "Subcategory with same name/slug exists in category";

/// List subcategories, optionally only those of one category.
pub async fn list_subcategories(db: &DatabaseConnection, category_name: Option<&str>) -> Result<Vec<service_subcategory::Model>, ServiceError> {
    let mut finder = service_subcategory::Entity::find();
    if let Some(name) = category_name {
        finder = finder.filter(service_subcategory::Column::CategoryName.eq(name));
    }
    let rows = finder.order_by_asc(service_subcategory::Column::Name).all(db).await?;
    Ok(rows)
}

/// Create a subcategory under an existing category.
#[instrument(skip(db))]
pub async fn create_subcategory(db: &DatabaseConnection, name: &str, category_name: &str) -> Result<service_subcategory::Model, ServiceError> {
    let category_name = category_name.trim();
    if name.trim().is_empty() || category_name.is_empty() {
        return Err(ServiceError::Validation("name and categoryName are required".into()));
    }
    let (name, slug) = service_subcategory::validate_name(name)?;

    let category = service_category::Entity::find()
        .filter(service_category::Column::Name.eq(category_name))
        .one(db)
        .await?;
    if category.is_none() {
        return Err(ServiceError::not_found("Category"));
    }

    let created = service_subcategory::new_active(name, slug, category_name.to_string())
        .insert(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(SUBCATEGORY_CONFLICT))?;
    info!(id = %created.id, name = %created.name, category = %created.category_name, "subcategory_created");
    Ok(created)
}

/// Rename in place; subcategories are not referenced by anything.
#[instrument(skip(db), fields(subcategory_id = %id))]
pub async fn rename_subcategory(db: &DatabaseConnection, id: Uuid, name: &str) -> Result<service_subcategory::Model, ServiceError> {
    let (name, slug) = service_subcategory::validate_name(name)?;
    let mut am: service_subcategory::ActiveModel = service_subcategory::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Subcategory"))?
        .into();
    am.name = Set(name);
    am.slug = Set(slug);
    am.updated_at = Set(Utc::now().into());
    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message("Duplicate subcategory in category"))?;
    info!(id = %updated.id, name = %updated.name, "subcategory_renamed");
    Ok(updated)
}

/// Delete a subcategory by id.
pub async fn delete_subcategory(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = service_subcategory::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Subcategory"));
    }
    info!(subcategory_id = %id, "subcategory_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_service::create_category;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn subcategory_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_category(&db, "Drafting").await?;
        create_category(&db, "Property Services").await?;

        let rent = create_subcategory(&db, " Rent Agreements ", "Drafting").await?;
        assert_eq!(rent.name, "Rent Agreements");
        assert_eq!(rent.slug, "rent-agreements");
        create_subcategory(&db, "Deeds", "Drafting").await?;
        create_subcategory(&db, "Title", "Property Services").await?;

        let drafting: Vec<_> = list_subcategories(&db, Some("Drafting")).await?.into_iter().map(|s| s.name).collect();
        assert_eq!(drafting, vec!["Deeds", "Rent Agreements"]);
        assert_eq!(list_subcategories(&db, None).await?.len(), 3);

        let renamed = rename_subcategory(&db, rent.id, "Rental Agreements").await?;
        assert_eq!(renamed.id, rent.id);
        assert_eq!(renamed.slug, "rental-agreements");

        delete_subcategory(&db, rent.id).await?;
        assert!(matches!(delete_subcategory(&db, rent.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn subcategory_requires_inputs_and_category() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(create_subcategory(&db, "Rent", "  ").await, Err(ServiceError::Validation(_))));
        assert!(matches!(create_subcategory(&db, "Rent", "Missing").await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_subcategory_in_same_category_conflicts() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_category(&db, "Drafting").await?;
        create_category(&db, "Consultation").await?;
        create_subcategory(&db, "General", "Drafting").await?;

        let dup = create_subcategory(&db, "General", "Drafting").await;
        assert!(matches!(dup, Err(ServiceError::Conflict(ref m)) if m == SUBCATEGORY_CONFLICT));
        // same name under another category is fine
        create_subcategory(&db, "General", "Consultation").await?;
        Ok(())
    }
}
