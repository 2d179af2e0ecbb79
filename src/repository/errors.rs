use std::sync::PoisonError;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(_: PoisonError<T>) -> Self {
        RepositoryError::LockPoisoned
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
