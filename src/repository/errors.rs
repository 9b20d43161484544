use thiserror::Error;

/// Failures of a call to the content backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Entity not found")]
    NotFound,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Message supplied by the backend, suitable for showing to the user.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            RepositoryError::Status { message, .. } | RepositoryError::Rejected(message)
                if !message.trim().is_empty() =>
            {
                Some(message)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
