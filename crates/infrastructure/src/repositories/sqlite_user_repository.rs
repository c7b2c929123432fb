use crate::database::{users, with_connection, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{DomainError, User, UserId, UserRepository};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct UserModel {
    id: i32,
    username: String,
    email: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUserModel {
    username: String,
    email: String,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::with_id(UserId(model.id), model.username, model.email)
    }
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            users::table
                .filter(users::id.eq(id.value()))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        user.validate()?;

        let new_user = NewUserModel {
            username: user.username.clone(),
            email: user.email.clone(),
        };

        let result = with_connection(&self.pool, move |conn| {
            let username = new_user.username.clone();
            conn.transaction(|conn| {
                diesel::insert_into(users::table)
                    .values(&new_user)
                    .execute(conn)?;

                users::table
                    .filter(users::username.eq(username))
                    .select(UserModel::as_select())
                    .first::<UserModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }
}
