use crate::errors::backend::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("This item is currently out of stock.")]
    OutOfStock,

    #[error("Internal error: {0}")]
    Internal(String),
}
