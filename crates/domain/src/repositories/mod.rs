pub mod folder_product_repository;
pub mod folder_repository;
pub mod product_repository;
pub mod user_repository;

pub use folder_product_repository::FolderProductRepository;
pub use folder_repository::FolderRepository;
pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;
