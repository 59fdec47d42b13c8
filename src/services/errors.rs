use thiserror::Error;

/// Domain errors returned by the catalog service layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No entity with this identity exists.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// The target exists, but the write would break a storage-level invariant.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),
    /// A value violated a domain rule.
    #[error("validation failed: {0}")]
    Validation(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    pub fn product_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "product",
            id,
        }
    }

    pub fn category_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "category",
            id,
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
