use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The entity exists but its ownership chain does not lead to the
    /// product named in the request path.
    #[error("{entity} {id} does not belong to product {product_id}")]
    InvalidReference {
        entity: &'static str,
        id: DbId,
        product_id: DbId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
