//! Service layer providing the student record operations on top of models.
//! - Separates validation and uniqueness rules from data access.
//! - Reuses the entity definitions in the `models` crate.
//! - Returns one error enum per operation instead of exception-style flow.

pub mod errors;
pub mod pagination;
pub mod student_service;
#[cfg(test)]
pub mod test_support;
