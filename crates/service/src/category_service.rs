//! Category administration.
//!
//! Services and subcategories reference a category by its *name*, so a rename
//! is performed as insert-new / re-point / delete-old inside one transaction.
//! The renamed category therefore comes back with a fresh id.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::service_category::{self, CategoryName};
use models::{service, service_subcategory};
use crate::errors::ServiceError;

pub const CATEGORY_CONFLICT: &str = "Another category with this name or slug already exists";
pub const DELETE_BLOCKED: &str = "Cannot delete category with existing services. Move or delete services first.";

/// List all categories ordered by name.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<service_category::Model>, ServiceError> {
    let rows = service_category::Entity::find()
        .order_by_asc(service_category::Column::Name)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get category by id.
pub async fn get_category(db: &DatabaseConnection, id: Uuid) -> Result<Option<service_category::Model>, ServiceError> {
    Ok(service_category::Entity::find_by_id(id).one(db).await?)
}

/// Get category by its public slug.
pub async fn get_category_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<service_category::Model>, ServiceError> {
    let found = service_category::Entity::find()
        .filter(service_category::Column::Slug.eq(slug))
        .one(db)
        .await?;
    Ok(found)
}

/// Fail with a conflict when another category already uses the name or slug.
async fn ensure_unique(db: &DatabaseConnection, exclude: Option<Uuid>, proposed: &CategoryName) -> Result<(), ServiceError> {
    let mut finder = service_category::Entity::find().filter(
        Condition::any()
            .add(service_category::Column::Name.eq(proposed.name.as_str()))
            .add(service_category::Column::Slug.eq(proposed.slug.as_str())),
    );
    if let Some(id) = exclude {
        finder = finder.filter(service_category::Column::Id.ne(id));
    }
    if let Some(other) = finder.one(db).await? {
        debug!(conflicting_id = %other.id, conflicting_name = %other.name, "category name or slug taken");
        return Err(ServiceError::conflict(CATEGORY_CONFLICT));
    }
    Ok(())
}

/// Create a category from a display name.
#[instrument(skip(db))]
pub async fn create_category(db: &DatabaseConnection, name: &str) -> Result<service_category::Model, ServiceError> {
    let proposed = service_category::validate_name(name)?;
    ensure_unique(db, None, &proposed).await?;
    let created = service_category::new_active(&proposed)
        .insert(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(CATEGORY_CONFLICT))?;
    info!(id = %created.id, name = %created.name, slug = %created.slug, "category_created");
    Ok(created)
}

/// Rename a category, keeping every service and subcategory reference valid.
///
/// - Renaming to the current name/slug returns the stored row untouched.
/// - When only the derived slug changes the row is updated in place.
/// - Otherwise, in one transaction: insert a row with the new name, move
///   services and subcategories over, delete the old row. The returned
///   category has a new id.
///
/// Nothing is written when validation, lookup or the uniqueness check fails,
/// and any failure inside the transaction rolls all three steps back.
#[instrument(skip(db), fields(category_id = %id))]
pub async fn rename_category(db: &DatabaseConnection, id: Uuid, name: &str) -> Result<service_category::Model, ServiceError> {
    let proposed = service_category::validate_name(name)?;
    let existing = get_category(db, id).await?.ok_or_else(|| ServiceError::not_found("Category"))?;

    if existing.name == proposed.name && existing.slug == proposed.slug {
        debug!("rename to current name; nothing to do");
        return Ok(existing);
    }

    ensure_unique(db, Some(id), &proposed).await?;

    if existing.name == proposed.name {
        let mut am: service_category::ActiveModel = existing.into();
        am.slug = Set(proposed.slug);
        am.updated_at = Set(Utc::now().into());
        let updated = am
            .update(db)
            .await
            .map_err(|e| ServiceError::from(e).with_conflict_message(CATEGORY_CONFLICT))?;
        info!(id = %updated.id, slug = %updated.slug, "category_slug_updated");
        return Ok(updated);
    }

    let (created, services_moved, subcategories_moved, old_name) = replace_in_txn(db, existing, proposed).await?;

    info!(
        old_id = %id,
        new_id = %created.id,
        old_name = %old_name,
        new_name = %created.name,
        services_moved,
        subcategories_moved,
        "category_renamed"
    );
    Ok(created)
}

/// Insert the renamed row, move services and subcategories onto it and delete
/// `old`, all in one transaction. Unique violations raised here (a concurrent
/// rename that won the race) come back as [`CATEGORY_CONFLICT`].
async fn replace_in_txn(
    db: &DatabaseConnection,
    old: service_category::Model,
    proposed: CategoryName,
) -> Result<(service_category::Model, u64, u64, String), ServiceError> {
    db.transaction::<_, (service_category::Model, u64, u64, String), ServiceError>(move |txn| {
        Box::pin(async move {
            // A case-only edit keeps the slug: park the old row's slug so the
            // new row can claim it before the old row is removed.
            if old.slug == proposed.slug {
                let mut parked: service_category::ActiveModel = old.clone().into();
                parked.slug = Set(format!("renaming-{}", old.id.simple()));
                parked.update(txn).await?;
            }

            let created = service_category::new_active(&proposed).insert(txn).await?;
            let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

            let services = service::Entity::update_many()
                .col_expr(service::Column::CategoryName, Expr::value(created.name.clone()))
                .col_expr(service::Column::UpdatedAt, Expr::value(now))
                .filter(service::Column::CategoryName.eq(old.name.as_str()))
                .exec(txn)
                .await?;

            let subcategories = service_subcategory::Entity::update_many()
                .col_expr(service_subcategory::Column::CategoryName, Expr::value(created.name.clone()))
                .col_expr(service_subcategory::Column::UpdatedAt, Expr::value(now))
                .filter(service_subcategory::Column::CategoryName.eq(old.name.as_str()))
                .exec(txn)
                .await?;

            service_category::Entity::delete_by_id(old.id).exec(txn).await?;

            Ok((created, services.rows_affected, subcategories.rows_affected, old.name))
        })
    })
    .await
    .map_err(|e| ServiceError::from_txn(e).with_conflict_message(CATEGORY_CONFLICT))
}

/// Number of services whose `category_name` is `name`.
pub async fn count_services(db: &DatabaseConnection, name: &str) -> Result<u64, ServiceError> {
    let n = service::Entity::find()
        .filter(service::Column::CategoryName.eq(name))
        .count(db)
        .await?;
    Ok(n)
}

/// Delete a category that no service references. Its subcategories go with it.
#[instrument(skip(db), fields(category_id = %id))]
pub async fn delete_category(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let category = get_category(db, id).await?.ok_or_else(|| ServiceError::not_found("Category"))?;

    let services = count_services(db, &category.name).await?;
    if services > 0 {
        info!(name = %category.name, services, "category_delete_blocked");
        return Err(ServiceError::conflict(DELETE_BLOCKED));
    }

    // A service created since the count trips the RESTRICT foreign key.
    service_category::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::from(e).with_conflict_message(DELETE_BLOCKED))?;
    info!(name = %category.name, "category_deleted");
    Ok(())
}
