use crate::entities::{User, UserId};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Read access to accounts owned by the authentication subsystem.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn save(&self, user: &User) -> Result<User, DomainError>;
}
