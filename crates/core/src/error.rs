use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Validation failures on contact forms are recovered inline by the route
/// layer (the form is re-rendered), so handlers only produce the other
/// variants in practice.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
