use crate::database::{products, with_connection, SqlitePool};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use domain::{DomainError, NewProduct, Product, ProductId, ProductRepository, UserId};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ProductModel {
    id: i32,
    user_id: i32,
    title: String,
    image: String,
    link: String,
    lprice: i32,
    myprice: i32,
}

#[derive(Insertable)]
#[diesel(table_name = products)]
struct NewProductModel {
    user_id: i32,
    title: String,
    image: String,
    link: String,
    lprice: i32,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: ProductId(model.id),
            owner: UserId(model.user_id),
            title: model.title,
            image: model.image,
            link: model.link,
            lprice: model.lprice,
            myprice: model.myprice,
        }
    }
}

impl From<&NewProduct> for NewProductModel {
    fn from(product: &NewProduct) -> Self {
        NewProductModel {
            user_id: product.owner.value(),
            title: product.title.clone(),
            image: product.image.clone(),
            link: product.link.clone(),
            lprice: product.lprice,
        }
    }
}

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let new_product = NewProductModel::from(product);

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction(|conn| {
                diesel::insert_into(products::table)
                    .values(&new_product)
                    .execute(conn)?;

                // Rowid of this connection's insert, unaffected by other writers.
                let id = diesel::select(sql::<Integer>("last_insert_rowid()"))
                    .get_result::<i32>(conn)?;

                products::table
                    .filter(products::id.eq(id))
                    .select(ProductModel::as_select())
                    .first::<ProductModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            products::table
                .filter(products::id.eq(id.value()))
                .select(ProductModel::as_select())
                .first::<ProductModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Product>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            products::table
                .filter(products::user_id.eq(owner.value()))
                .order(products::id.asc())
                .select(ProductModel::as_select())
                .load::<ProductModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
