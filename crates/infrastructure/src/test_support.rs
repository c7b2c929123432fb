use crate::database::Database;
use crate::repositories::SqliteUserRepository;
use domain::{User, UserId, UserRepository};

pub fn memory_database() -> Database {
    Database::open(":memory:", 1).expect("in-memory database")
}

pub async fn create_user(database: &Database, username: &str) -> UserId {
    let users = SqliteUserRepository::new(database.get_pool().clone());
    users
        .save(&User::new(username.to_string(), format!("{}@sparta.com", username)))
        .await
        .expect("user saved")
        .id
        .expect("user id assigned")
}
