use crate::database::{folders, with_connection, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{DomainError, Folder, FolderId, FolderRepository, UserId};

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = folders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct FolderModel {
    id: i32,
    user_id: i32,
    name: String,
}

#[derive(Insertable)]
#[diesel(table_name = folders)]
struct NewFolderModel<'a> {
    user_id: i32,
    name: &'a str,
}

impl From<FolderModel> for Folder {
    fn from(model: FolderModel) -> Self {
        Folder::new(FolderId(model.id), model.name, UserId(model.user_id))
    }
}

pub struct SqliteFolderRepository {
    pool: SqlitePool,
}

impl SqliteFolderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderRepository for SqliteFolderRepository {
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Folder>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            folders::table
                .filter(folders::user_id.eq(owner.value()))
                .order(folders::id.asc())
                .select(FolderModel::as_select())
                .load::<FolderModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: FolderId) -> Result<Option<Folder>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            folders::table
                .filter(folders::id.eq(id.value()))
                .select(FolderModel::as_select())
                .first::<FolderModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save_all(&self, owner: UserId, names: &[String]) -> Result<Vec<Folder>, DomainError> {
        let names = names.to_vec();
        let user_id = owner.value();

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction(|conn| {
                let mut created = Vec::with_capacity(names.len());
                for name in &names {
                    // A concurrent batch may have inserted the same name since
                    // the caller checked; the unique index makes that a no-op.
                    let inserted = diesel::insert_or_ignore_into(folders::table)
                        .values(&NewFolderModel {
                            user_id,
                            name: name.as_str(),
                        })
                        .execute(conn)?;

                    if inserted == 0 {
                        continue;
                    }

                    let model = folders::table
                        .filter(folders::user_id.eq(user_id))
                        .filter(folders::name.eq(name.as_str()))
                        .select(FolderModel::as_select())
                        .first::<FolderModel>(conn)?;
                    created.push(model);
                }
                Ok(created)
            })
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
