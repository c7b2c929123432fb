use domain::*;
use infrastructure::*;
use std::sync::Arc;
use tracing::info;

/// Select shop application - wires SQLite adapters into the domain services
pub struct SelectShopApp {
    pub folder_registry: FolderRegistry,
    pub folder_product_index: FolderProductIndex,
    pub product_catalog: ProductCatalog,
    pub user_repository: Arc<dyn UserRepository>,
}

impl SelectShopApp {
    /// Opens the database, applies migrations and builds the services.
    pub fn new(database_url: &str, pool_size: u32) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::open(database_url, pool_size)?;
        let pool = database.get_pool().clone();
        info!(database = database_url, pool_size, "database ready");

        // Create repository implementations
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool.clone()));
        let folder_repository: Arc<dyn FolderRepository> =
            Arc::new(SqliteFolderRepository::new(pool.clone()));
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(SqliteProductRepository::new(pool.clone()));
        let folder_product_repository: Arc<dyn FolderProductRepository> =
            Arc::new(SqliteFolderProductRepository::new(pool));

        Ok(Self::from_repositories(
            user_repository,
            folder_repository,
            product_repository,
            folder_product_repository,
        ))
    }

    /// Builds the services over arbitrary repository implementations.
    pub fn from_repositories(
        user_repository: Arc<dyn UserRepository>,
        folder_repository: Arc<dyn FolderRepository>,
        product_repository: Arc<dyn ProductRepository>,
        folder_product_repository: Arc<dyn FolderProductRepository>,
    ) -> Self {
        let folder_registry = FolderRegistry::new(folder_repository.clone());

        let folder_product_index = FolderProductIndex::new(
            folder_repository,
            product_repository.clone(),
            folder_product_repository.clone(),
        );

        let product_catalog = ProductCatalog::new(product_repository, folder_product_repository);

        Self {
            folder_registry,
            folder_product_index,
            product_catalog,
            user_repository,
        }
    }

    /// Resolves an identity handed over by the authentication boundary.
    pub async fn resolve_user(&self, id: UserId) -> Result<User, DomainError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User {} not found", id)))
    }
}
