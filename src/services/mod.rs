//! Use cases behind the HTTP routes.
//!
//! Services are plain functions generic over the repository traits they
//! need, so they run against the in-memory store in production and against
//! mocks in tests.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod broadcast;
pub mod chats;
pub mod dashboard;
pub mod roster;
pub mod session;
pub mod settings;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// User input failed validation; the message is shown to the operator.
    #[error("{0}")]
    Form(String),

    #[error("resource not found")]
    NotFound,

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
