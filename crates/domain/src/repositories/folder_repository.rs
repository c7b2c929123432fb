use crate::entities::{Folder, FolderId, UserId};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Persistence port for folders.
///
/// Implementations must enforce uniqueness of `(owner, name)` so that
/// concurrent batches for the same user cannot produce duplicates.
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Folders owned by `owner` in storage order.
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Folder>, DomainError>;

    async fn find_by_id(&self, id: FolderId) -> Result<Option<Folder>, DomainError>;

    /// Inserts one folder per name in a single transaction, silently
    /// ignoring names that already exist for `owner`. Returns the rows
    /// actually created.
    async fn save_all(&self, owner: UserId, names: &[String]) -> Result<Vec<Folder>, DomainError>;
}
