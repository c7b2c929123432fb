use super::folder_registry::owned_folder;
use super::product_catalog::owned_product;
use crate::entities::{Folder, FolderId, FolderProduct, Product, ProductId, UserId};
use crate::errors::DomainError;
use crate::repositories::{FolderProductRepository, FolderRepository, ProductRepository};
use std::sync::Arc;
use tracing::info;

/// Resolves which products are filed under which folders.
pub struct FolderProductIndex {
    folder_repository: Arc<dyn FolderRepository>,
    product_repository: Arc<dyn ProductRepository>,
    folder_product_repository: Arc<dyn FolderProductRepository>,
}

impl FolderProductIndex {
    pub fn new(
        folder_repository: Arc<dyn FolderRepository>,
        product_repository: Arc<dyn ProductRepository>,
        folder_product_repository: Arc<dyn FolderProductRepository>,
    ) -> Self {
        Self {
            folder_repository,
            product_repository,
            folder_product_repository,
        }
    }

    /// Products linked to an already-authorized folder.
    ///
    /// Fails with `NotFound` when the folder is no longer in storage.
    pub async fn products_in(&self, folder: &Folder) -> Result<Vec<Product>, DomainError> {
        if self.folder_repository.find_by_id(folder.id).await?.is_none() {
            return Err(DomainError::not_found(format!("Folder {} not found", folder.id)));
        }

        let products = self
            .folder_product_repository
            .find_products_by_folder(folder.id)
            .await?;

        Ok(products
            .into_iter()
            .filter(|p| p.is_owned_by(folder.owner))
            .collect())
    }

    /// Products in a folder, after checking that `owner` owns it.
    pub async fn products_in_owned(
        &self,
        folder_id: FolderId,
        owner: UserId,
    ) -> Result<Vec<Product>, DomainError> {
        let folder = owned_folder(self.folder_repository.as_ref(), folder_id, owner).await?;
        self.products_in(&folder).await
    }

    /// Files a product under a folder; both must belong to `owner`.
    pub async fn add_product_to_folder(
        &self,
        product_id: ProductId,
        folder_id: FolderId,
        owner: UserId,
    ) -> Result<(), DomainError> {
        let product = owned_product(self.product_repository.as_ref(), product_id, owner).await?;
        let folder = owned_folder(self.folder_repository.as_ref(), folder_id, owner).await?;

        let link = FolderProduct::new(folder.id, product.id);
        if self.folder_product_repository.exists(link).await?
            || !self.folder_product_repository.save(link).await?
        {
            return Err(DomainError::invalid(format!(
                "Product {} is already in folder '{}'",
                product.id, folder.name
            )));
        }

        info!(owner = %owner, folder = %folder.id, product = %product.id, "product filed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewProduct;
    use crate::services::test_support::MemoryStore;
    use crate::services::FolderRegistry;

    struct Fixture {
        store: Arc<MemoryStore>,
        registry: FolderRegistry,
        index: FolderProductIndex,
    }

    impl Fixture {
        fn new() -> Self {
            let store = Arc::new(MemoryStore::new());
            Self {
                registry: FolderRegistry::new(store.clone()),
                index: FolderProductIndex::new(store.clone(), store.clone(), store.clone()),
                store,
            }
        }

        async fn folder(&self, owner: UserId, name: &str) -> Folder {
            self.registry
                .add_folders(&[name.to_string()], owner)
                .await
                .unwrap();
            let summary = self
                .registry
                .get_folders(owner)
                .await
                .unwrap()
                .into_iter()
                .find(|f| f.name == name)
                .unwrap();
            owned_folder(self.store.as_ref(), summary.id, owner)
                .await
                .unwrap()
        }

        async fn product(&self, owner: UserId, title: &str) -> Product {
            let repository: Arc<dyn ProductRepository> = self.store.clone();
            repository
                .save(&NewProduct::new(
                    owner,
                    title.to_string(),
                    "https://shopping-phinf.pstatic.net/main.jpg".to_string(),
                    "https://search.shopping.naver.com/gate.nhn?id=1".to_string(),
                    959000,
                ))
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn products_are_listed_per_folder() {
        let fx = Fixture::new();
        let owner = fx.store.insert_user("sollertia4351");
        let devices = fx.folder(owner, "전자기기").await;
        let gifts = fx.folder(owner, "선물").await;
        let phone = fx.product(owner, "Apple 아이폰 14 프로").await;
        let watch = fx.product(owner, "Galaxy Watch").await;

        fx.index.add_product_to_folder(phone.id, devices.id, owner).await.unwrap();
        fx.index.add_product_to_folder(watch.id, devices.id, owner).await.unwrap();
        fx.index.add_product_to_folder(watch.id, gifts.id, owner).await.unwrap();

        let in_devices = fx.index.products_in(&devices).await.unwrap();
        let in_gifts = fx.index.products_in(&gifts).await.unwrap();
        assert_eq!(in_devices, vec![phone, watch.clone()]);
        assert_eq!(in_gifts, vec![watch]);
    }

    #[tokio::test]
    async fn foreign_product_linked_in_storage_is_not_listed() {
        let fx = Fixture::new();
        let alice = fx.store.insert_user("alice");
        let bob = fx.store.insert_user("bob");
        let folder = fx.folder(alice, "전자기기").await;
        let own = fx.product(alice, "alice's phone").await;
        let foreign = fx.product(bob, "bob's phone").await;
        let links: Arc<dyn FolderProductRepository> = fx.store.clone();

        // Written below the service, bypassing its ownership checks.
        links.save(FolderProduct::new(folder.id, own.id)).await.unwrap();
        links.save(FolderProduct::new(folder.id, foreign.id)).await.unwrap();

        assert_eq!(fx.index.products_in(&folder).await.unwrap(), vec![own]);
    }

    #[tokio::test]
    async fn empty_folder_has_no_products() {
        let fx = Fixture::new();
        let owner = fx.store.insert_user("robbie");
        let folder = fx.folder(owner, "empty").await;

        assert!(fx.index.products_in(&folder).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_folder_is_not_found() {
        let fx = Fixture::new();
        let owner = fx.store.insert_user("robbie");
        let ghost = Folder::new(FolderId(999), "ghost".to_string(), owner);

        assert!(matches!(
            fx.index.products_in(&ghost).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn filing_twice_is_rejected() {
        let fx = Fixture::new();
        let owner = fx.store.insert_user("robbie");
        let folder = fx.folder(owner, "전자기기").await;
        let product = fx.product(owner, "phone").await;

        fx.index.add_product_to_folder(product.id, folder.id, owner).await.unwrap();
        let err = fx
            .index
            .add_product_to_folder(product.id, folder.id, owner)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(fx.index.products_in(&folder).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cannot_file_into_another_users_folder() {
        let fx = Fixture::new();
        let alice = fx.store.insert_user("alice");
        let bob = fx.store.insert_user("bob");
        let alice_folder = fx.folder(alice, "mine").await;
        let bob_product = fx.product(bob, "bob's phone").await;

        let err = fx
            .index
            .add_product_to_folder(bob_product.id, alice_folder.id, bob)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(fx.index.products_in(&alice_folder).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owned_lookup_hides_foreign_folders() {
        let fx = Fixture::new();
        let alice = fx.store.insert_user("alice");
        let bob = fx.store.insert_user("bob");
        let folder = fx.folder(alice, "mine").await;

        assert!(fx.index.products_in_owned(folder.id, alice).await.is_ok());
        assert!(matches!(
            fx.index.products_in_owned(folder.id, bob).await,
            Err(DomainError::NotFound(_))
        ));
    }
}
