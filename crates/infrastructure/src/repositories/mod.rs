pub mod sqlite_folder_product_repository;
pub mod sqlite_folder_repository;
pub mod sqlite_product_repository;
pub mod sqlite_user_repository;

pub use sqlite_folder_product_repository::SqliteFolderProductRepository;
pub use sqlite_folder_repository::SqliteFolderRepository;
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_user_repository::SqliteUserRepository;
