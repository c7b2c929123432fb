use domain::{FolderSummary, NewProduct, Product, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRequest {
    pub folder_names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderResponse {
    pub id: i32,
    pub name: String,
}

impl From<FolderSummary> for FolderResponse {
    fn from(folder: FolderSummary) -> Self {
        Self {
            id: folder.id.value(),
            name: folder.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductRequest {
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub link: String,
    pub lprice: i32,
}

impl ProductRequest {
    pub fn into_new_product(self, owner: UserId) -> NewProduct {
        NewProduct::new(owner, self.title, self.image, self.link, self.lprice)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductResponse {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub link: String,
    pub lprice: i32,
    pub myprice: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title,
            image: product.image,
            link: product.link,
            lprice: product.lprice,
            myprice: product.myprice,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFolderRequest {
    pub folder_id: i32,
}
