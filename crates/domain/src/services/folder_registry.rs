use crate::entities::{Folder, FolderId, FolderSummary, UserId};
use crate::errors::DomainError;
use crate::repositories::FolderRepository;
use crate::validation::validate_folder_names;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Creates and enumerates a user's folders.
///
/// Names are compared exactly (case-sensitive, no trimming) and scoped to
/// the owner, so two users may both own a folder called "전자기기".
pub struct FolderRegistry {
    folder_repository: Arc<dyn FolderRepository>,
}

impl FolderRegistry {
    pub fn new(folder_repository: Arc<dyn FolderRepository>) -> Self {
        Self { folder_repository }
    }

    /// Creates a folder for every name `owner` does not already have.
    ///
    /// Names already owned, and repeats within the same batch, are skipped
    /// without error. The whole batch is rejected when it is empty or any
    /// name is blank; nothing is written in that case.
    pub async fn add_folders(&self, names: &[String], owner: UserId) -> Result<(), DomainError> {
        validate_folder_names(names)?;

        let existing = self.folder_repository.find_by_owner(owner).await?;
        let mut seen: HashSet<&str> = existing.iter().map(|f| f.name.as_str()).collect();

        let mut pending = Vec::with_capacity(names.len());
        for name in names {
            if seen.insert(name.as_str()) {
                pending.push(name.clone());
            } else {
                debug!(owner = %owner, folder = %name, "skipping existing folder name");
            }
        }

        if pending.is_empty() {
            info!(owner = %owner, requested = names.len(), "no new folders to create");
            return Ok(());
        }

        let created = self.folder_repository.save_all(owner, &pending).await?;
        info!(
            owner = %owner,
            requested = names.len(),
            created = created.len(),
            "folders added"
        );

        Ok(())
    }

    /// All folders owned by `owner`, in storage order.
    pub async fn get_folders(&self, owner: UserId) -> Result<Vec<FolderSummary>, DomainError> {
        let folders = self.folder_repository.find_by_owner(owner).await?;
        Ok(folders.into_iter().map(FolderSummary::from).collect())
    }
}

/// Looks up a folder, reporting foreign folders as missing.
pub(crate) async fn owned_folder(
    repository: &dyn FolderRepository,
    id: FolderId,
    owner: UserId,
) -> Result<Folder, DomainError> {
    match repository.find_by_id(id).await? {
        Some(folder) if folder.is_owned_by(owner) => Ok(folder),
        _ => Err(DomainError::not_found(format!("Folder {} not found", id))),
    }
}
