//! Page-level operations shared by the HTTP routes.
//!
//! Services are generic over the repository traits they need, which keeps
//! them testable with an in-memory transport.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod admin;
pub mod auth;
pub mod chrome;
pub mod contacts;
pub mod footer;
pub mod home;
pub mod inbox;
pub mod pages;
pub mod seo;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    Backend(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Wraps a backend failure, preferring the backend's own message over
    /// `fallback`.
    pub fn backend(err: RepositoryError, fallback: &str) -> Self {
        match err {
            RepositoryError::Unauthorized => ServiceError::Unauthorized,
            RepositoryError::NotFound => ServiceError::NotFound,
            err => {
                log::error!("Backend request failed: {err}");
                let message = err.backend_message().unwrap_or(fallback).to_string();
                ServiceError::Backend(message)
            }
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::backend(err, "Request failed")
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ServiceError::backend(
            RepositoryError::Rejected("Slug already exists".into()),
            "Operation failed",
        );
        assert_eq!(err, ServiceError::Backend("Slug already exists".into()));

        let err = ServiceError::backend(
            RepositoryError::Network("timed out".into()),
            "Operation failed",
        );
        assert_eq!(err, ServiceError::Backend("Operation failed".into()));
    }

    #[test]
    fn auth_and_missing_records_keep_their_meaning() {
        assert_eq!(
            ServiceError::from(RepositoryError::Unauthorized),
            ServiceError::Unauthorized
        );
        assert_eq!(ServiceError::from(RepositoryError::NotFound), ServiceError::NotFound);
    }
}
