pub mod client;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),

    #[error("{0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            err => ServiceError::Repository(err),
        }
    }
}
