use crate::entities::{FolderSummary, NewProduct, Product, ProductId, UserId};
use crate::errors::DomainError;
use crate::repositories::{FolderProductRepository, ProductRepository};
use std::sync::Arc;
use tracing::info;

/// Registers and lists a user's bookmarked products.
pub struct ProductCatalog {
    product_repository: Arc<dyn ProductRepository>,
    folder_product_repository: Arc<dyn FolderProductRepository>,
}

impl ProductCatalog {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        folder_product_repository: Arc<dyn FolderProductRepository>,
    ) -> Self {
        Self {
            product_repository,
            folder_product_repository,
        }
    }

    pub async fn register(&self, product: NewProduct) -> Result<Product, DomainError> {
        product.validate()?;

        let saved = self.product_repository.save(&product).await?;
        info!(owner = %saved.owner, product = %saved.id, "product registered");
        Ok(saved)
    }

    pub async fn list(&self, owner: UserId) -> Result<Vec<Product>, DomainError> {
        self.product_repository.find_by_owner(owner).await
    }

    /// Folders the product is filed under.
    pub async fn folders_of(
        &self,
        product_id: ProductId,
        owner: UserId,
    ) -> Result<Vec<FolderSummary>, DomainError> {
        let product = owned_product(self.product_repository.as_ref(), product_id, owner).await?;
        let folders = self
            .folder_product_repository
            .find_folders_by_product(product.id)
            .await?;

        Ok(folders
            .into_iter()
            .filter(|f| f.is_owned_by(owner))
            .map(FolderSummary::from)
            .collect())
    }
}

pub(crate) async fn owned_product(
    repository: &dyn ProductRepository,
    id: ProductId,
    owner: UserId,
) -> Result<Product, DomainError> {
    match repository.find_by_id(id).await? {
        Some(product) if product.is_owned_by(owner) => Ok(product),
        _ => Err(DomainError::not_found(format!("Product {} not found", id))),
    }
}
