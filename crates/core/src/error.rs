use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A required argument was absent. Carries the parameter name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A collaborator broke a contract the caller had already established.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
