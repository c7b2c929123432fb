use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use domain::DomainError;
use tracing::info;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const IN_MEMORY: &str = ":memory:";

/// Per-connection pragmas; SQLite leaves foreign keys off by default.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a pool against `database_url`.
    ///
    /// An in-memory database lives inside a single connection, so the pool
    /// is capped at one connection in that case.
    pub fn new(database_url: &str, pool_size: u32) -> Result<Self, DomainError> {
        let mut builder = r2d2::Pool::builder()
            .max_size(pool_size.max(1))
            .connection_customizer(Box::new(ConnectionOptions));

        if database_url == IN_MEMORY {
            // Recycling the connection would drop the database.
            builder = builder.max_size(1).idle_timeout(None).max_lifetime(None);
        }

        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = builder
            .build(manager)
            .map_err(|e| DomainError::storage(format!("Failed to create SQLite pool: {}", e)))?;

        Ok(Database { pool })
    }

    /// Opens the pool and brings the schema up to date.
    pub fn open(database_url: &str, pool_size: u32) -> Result<Self, DomainError> {
        let database = Self::new(database_url, pool_size)?;
        database.run_migrations()?;
        Ok(database)
    }

    pub fn run_migrations(&self) -> Result<(), DomainError> {
        let mut pooled = self
            .pool
            .get()
            .map_err(|e| DomainError::storage(e.to_string()))?;
        let conn: &mut SqliteConnection = &mut pooled;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DomainError::storage(format!("Migration failed: {}", e)))?;

        info!(applied = applied.len(), "database migrations complete");
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Runs a blocking Diesel query on the blocking thread pool.
pub(crate) async fn with_connection<T, F>(pool: &SqlitePool, query: F) -> Result<T, DomainError>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| DomainError::storage(e.to_string()))?;
        query(&mut conn).map_err(|e| DomainError::storage(e.to_string()))
    })
    .await
    .map_err(|e| DomainError::storage(e.to_string()))?
}
