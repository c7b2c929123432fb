use super::{FolderId, ProductId};
use serde::{Deserialize, Serialize};

/// Link record filing one product under one folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderProduct {
    pub folder_id: FolderId,
    pub product_id: ProductId,
}

impl FolderProduct {
    pub fn new(folder_id: FolderId, product_id: ProductId) -> Self {
        Self {
            folder_id,
            product_id,
        }
    }
}
