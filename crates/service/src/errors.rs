use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(msg: &str) -> Self { Self::Conflict(msg.to_string()) }

    /// Human-readable reason without the variant prefix, for API responses.
    pub fn message(&self) -> String {
        match self {
            ServiceError::Validation(m) | ServiceError::NotFound(m) | ServiceError::Conflict(m) | ServiceError::Db(m) => m.clone(),
            ServiceError::Model(models::errors::ModelError::Validation(m)) => m.clone(),
            ServiceError::Model(models::errors::ModelError::Db(m)) => m.clone(),
        }
    }

    /// True for caller mistakes (bad input), including model-level validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_)))
    }

    /// Replace the generic text of a constraint-derived conflict with an entity specific one.
    pub fn with_conflict_message(self, msg: &str) -> Self {
        match self {
            ServiceError::Conflict(_) => ServiceError::conflict(msg),
            other => other,
        }
    }

    pub(crate) fn from_txn(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => db.into(),
            TransactionError::Transaction(inner) => inner,
        }
    }
}

/// Constraint violations raised by the database become conflicts; anything
/// else is an opaque database failure.
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => ServiceError::Conflict(format!("unique constraint violated: {detail}")),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => ServiceError::Conflict(format!("foreign key constraint violated: {detail}")),
            _ => ServiceError::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn message_strips_variant_prefix() {
        assert_eq!(ServiceError::not_found("Category").message(), "Category not found");
        assert_eq!(ServiceError::Model(ModelError::Validation("Category name is required".into())).message(), "Category name is required");
    }

    #[test]
    fn model_validation_counts_as_validation() {
        assert!(ServiceError::Model(ModelError::Validation("x".into())).is_validation());
        assert!(!ServiceError::Model(ModelError::Db("x".into())).is_validation());
        assert!(!ServiceError::conflict("x").is_validation());
    }

    #[test]
    fn conflict_message_rewritten_only_for_conflicts() {
        let e = ServiceError::conflict("unique constraint violated").with_conflict_message("Duplicate");
        assert_eq!(e.message(), "Duplicate");
        let e = ServiceError::Db("boom".into()).with_conflict_message("Duplicate");
        assert!(matches!(e, ServiceError::Db(_)));
    }

    #[test]
    fn plain_db_error_maps_to_db() {
        let e: ServiceError = DbErr::Custom("connection reset".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }
}
