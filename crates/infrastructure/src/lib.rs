pub mod database;
pub mod repositories;

pub use database::{Database, SqlitePool};
pub use repositories::*;

#[cfg(test)]
pub(crate) mod test_support;
