use crate::entities::{Folder, FolderId, FolderProduct, Product, ProductId};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Persistence port for the folder/product association.
#[async_trait]
pub trait FolderProductRepository: Send + Sync {
    async fn exists(&self, link: FolderProduct) -> Result<bool, DomainError>;

    /// Stores the link. Returns `false` when it was already present.
    async fn save(&self, link: FolderProduct) -> Result<bool, DomainError>;

    /// Products filed under `folder_id`, joined through the association.
    async fn find_products_by_folder(&self, folder_id: FolderId) -> Result<Vec<Product>, DomainError>;

    async fn find_folders_by_product(&self, product_id: ProductId) -> Result<Vec<Folder>, DomainError>;
}
