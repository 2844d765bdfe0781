//! Service layer providing the catalog's business operations on top of models.
//! - Separates business rules (uniqueness, rename choreography, delete guards) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Every operation reports failures through [`errors::ServiceError`].

pub mod errors;
pub mod runtime;
pub mod category_service;
pub mod subcategory_service;
pub mod catalog_service;
pub mod form_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
