//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls connecting them live here.

use crate::domain::account::AccountError;
use crate::domain::financing::FinancingError;
use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<FinancingError> for ServiceError {
    fn from(val: FinancingError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<AccountError> for ServiceError {
    fn from(val: AccountError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<crate::forms::products::ProductFormError> for ServiceError {
    fn from(val: crate::forms::products::ProductFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
