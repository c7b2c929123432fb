use super::UserId;
use crate::validation::require_non_blank;
use serde::{Deserialize, Serialize};

/// Account owning folders and products.
///
/// Rows are written by the signup subsystem; this crate only reads them to
/// resolve the identity attached to a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>, // None until persisted
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: None,
            username,
            email,
        }
    }

    pub fn with_id(id: UserId, username: String, email: String) -> Self {
        Self {
            id: Some(id),
            username,
            email,
        }
    }

    pub fn validate(&self) -> Result<(), crate::DomainError> {
        require_non_blank(&self.username, "Username cannot be empty")?;
        require_non_blank(&self.email, "Email cannot be empty")?;

        if !self.email.contains('@') {
            return Err(crate::DomainError::invalid("Invalid email format"));
        }

        Ok(())
    }
}
