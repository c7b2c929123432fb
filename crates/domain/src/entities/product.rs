use super::{ProductId, UserId};
use crate::validation::require_non_blank;
use crate::DomainError;
use serde::{Deserialize, Serialize};

/// A bookmarked external listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub owner: UserId,
    pub title: String,
    pub image: String,
    pub link: String,
    pub lprice: i32,
    /// Target price; maintained by the price-alert feature, 0 when unset.
    pub myprice: i32,
}

impl Product {
    pub fn is_owned_by(&self, owner: UserId) -> bool {
        self.owner == owner
    }
}

/// A product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub owner: UserId,
    pub title: String,
    pub image: String,
    pub link: String,
    pub lprice: i32,
}

impl NewProduct {
    pub fn new(owner: UserId, title: String, image: String, link: String, lprice: i32) -> Self {
        Self {
            owner,
            title,
            image,
            link,
            lprice,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank(&self.title, "Product title cannot be empty")?;
        require_non_blank(&self.link, "Product link cannot be empty")?;

        if self.lprice < 0 {
            return Err(DomainError::invalid("Lowest price cannot be negative"));
        }

        Ok(())
    }
}
