use crate::entities::{NewProduct, Product, ProductId, UserId};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Product>, DomainError>;
}
