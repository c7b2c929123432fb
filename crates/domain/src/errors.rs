use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or empty input, such as an empty folder-name list.
    #[error("{0}")]
    InvalidArgument(String),

    /// The referenced row does not exist or belongs to another user.
    #[error("{0}")]
    NotFound(String),

    /// The persistence layer failed; never retried automatically.
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl DomainError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailure(message.into())
    }
}
