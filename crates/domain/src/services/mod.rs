pub mod folder_product_index;
pub mod folder_registry;
pub mod product_catalog;

#[cfg(test)]
pub(crate) mod test_support;

pub use folder_product_index::FolderProductIndex;
pub use folder_registry::FolderRegistry;
pub use product_catalog::ProductCatalog;
