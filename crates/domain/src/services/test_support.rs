//! In-memory stand-ins for the repository ports.

use crate::entities::*;
use crate::errors::DomainError;
use crate::repositories::*;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    folders: Vec<Folder>,
    products: Vec<Product>,
    links: Vec<FolderProduct>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Single store implementing every port, with an optional failure switch.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn folder_count(&self) -> usize {
        self.tables.lock().unwrap().folders.len()
    }

    pub fn insert_user(&self, username: &str) -> UserId {
        let mut tables = self.tables.lock().unwrap();
        let id = UserId(tables.next_id());
        tables.users.push(User::with_id(
            id,
            username.to_string(),
            format!("{}@sparta.com", username),
        ));
        id
    }

    fn check_writes(&self) -> Result<(), DomainError> {
        if *self.failing.lock().unwrap() {
            return Err(DomainError::storage("disk I/O error"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        self.check_writes()?;
        let mut tables = self.tables.lock().unwrap();
        let id = UserId(tables.next_id());
        let saved = User::with_id(id, user.username.clone(), user.email.clone());
        tables.users.push(saved.clone());
        Ok(saved)
    }
}

#[async_trait]
impl FolderRepository for MemoryStore {
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Folder>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .folders
            .iter()
            .filter(|f| f.owner == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: FolderId) -> Result<Option<Folder>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.folders.iter().find(|f| f.id == id).cloned())
    }

    async fn save_all(&self, owner: UserId, names: &[String]) -> Result<Vec<Folder>, DomainError> {
        self.check_writes()?;
        let mut tables = self.tables.lock().unwrap();
        let mut created = Vec::new();
        for name in names {
            if tables
                .folders
                .iter()
                .any(|f| f.owner == owner && &f.name == name)
            {
                continue;
            }
            let folder = Folder::new(FolderId(tables.next_id()), name.clone(), owner);
            tables.folders.push(folder.clone());
            created.push(folder);
        }
        Ok(created)
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        self.check_writes()?;
        let mut tables = self.tables.lock().unwrap();
        let saved = Product {
            id: ProductId(tables.next_id()),
            owner: product.owner,
            title: product.title.clone(),
            image: product.image.clone(),
            link: product.link.clone(),
            lprice: product.lprice,
            myprice: 0,
        };
        tables.products.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FolderProductRepository for MemoryStore {
    async fn exists(&self, link: FolderProduct) -> Result<bool, DomainError> {
        Ok(self.tables.lock().unwrap().links.contains(&link))
    }

    async fn save(&self, link: FolderProduct) -> Result<bool, DomainError> {
        self.check_writes()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.links.contains(&link) {
            return Ok(false);
        }
        tables.links.push(link);
        Ok(true)
    }

    async fn find_products_by_folder(&self, folder_id: FolderId) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .links
            .iter()
            .filter(|l| l.folder_id == folder_id)
            .filter_map(|l| tables.products.iter().find(|p| p.id == l.product_id).cloned())
            .collect())
    }

    async fn find_folders_by_product(&self, product_id: ProductId) -> Result<Vec<Folder>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .links
            .iter()
            .filter(|l| l.product_id == product_id)
            .filter_map(|l| tables.folders.iter().find(|f| f.id == l.folder_id).cloned())
            .collect())
    }
}
