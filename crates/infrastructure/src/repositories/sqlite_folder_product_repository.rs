use super::sqlite_folder_repository::FolderModel;
use super::sqlite_product_repository::ProductModel;
use crate::database::{folder_products, folders, products, with_connection, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{
    DomainError, Folder, FolderId, FolderProduct, FolderProductRepository, Product, ProductId,
};

#[derive(Insertable)]
#[diesel(table_name = folder_products)]
struct NewFolderProductModel {
    folder_id: i32,
    product_id: i32,
}

impl From<FolderProduct> for NewFolderProductModel {
    fn from(link: FolderProduct) -> Self {
        NewFolderProductModel {
            folder_id: link.folder_id.value(),
            product_id: link.product_id.value(),
        }
    }
}

pub struct SqliteFolderProductRepository {
    pool: SqlitePool,
}

impl SqliteFolderProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderProductRepository for SqliteFolderProductRepository {
    async fn exists(&self, link: FolderProduct) -> Result<bool, DomainError> {
        let count = with_connection(&self.pool, move |conn| {
            folder_products::table
                .filter(folder_products::folder_id.eq(link.folder_id.value()))
                .filter(folder_products::product_id.eq(link.product_id.value()))
                .count()
                .get_result::<i64>(conn)
        })
        .await?;

        Ok(count > 0)
    }

    async fn save(&self, link: FolderProduct) -> Result<bool, DomainError> {
        let new_link = NewFolderProductModel::from(link);

        let inserted = with_connection(&self.pool, move |conn| {
            diesel::insert_or_ignore_into(folder_products::table)
                .values(&new_link)
                .execute(conn)
        })
        .await?;

        Ok(inserted > 0)
    }

    async fn find_products_by_folder(&self, folder_id: FolderId) -> Result<Vec<Product>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            folder_products::table
                .inner_join(products::table)
                .filter(folder_products::folder_id.eq(folder_id.value()))
                .order(folder_products::id.asc())
                .select(ProductModel::as_select())
                .load::<ProductModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_folders_by_product(&self, product_id: ProductId) -> Result<Vec<Folder>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            folder_products::table
                .inner_join(folders::table)
                .filter(folder_products::product_id.eq(product_id.value()))
                .order(folder_products::id.asc())
                .select(FolderModel::as_select())
                .load::<FolderModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
