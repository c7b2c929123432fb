use super::{FolderId, UserId};
use serde::{Deserialize, Serialize};

/// A named collection of bookmarked products, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub owner: UserId,
}

impl Folder {
    pub fn new(id: FolderId, name: String, owner: UserId) -> Self {
        Self { id, name, owner }
    }

    pub fn is_owned_by(&self, owner: UserId) -> bool {
        self.owner == owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub id: FolderId,
    pub name: String,
}

impl From<Folder> for FolderSummary {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
        }
    }
}
