use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Storage-level signals raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed row does not exist.
    #[error("entity not found")]
    NotFound,
    /// A write referenced a row of `table` that does not exist.
    #[error("{table} {id} does not exist")]
    UnresolvedReference { table: &'static str, id: i32 },
    /// The write would leave a dependent row dangling.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),
    /// Stored data no longer satisfies a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(DieselError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info)
                if matches!(kind, DatabaseErrorKind::ForeignKeyViolation)
                    || info.message().contains("FOREIGN KEY constraint failed") =>
            {
                RepositoryError::IntegrityViolation(info.message().to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}
