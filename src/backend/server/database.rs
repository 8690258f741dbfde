/**
 * Persistence Handle
 *
 * This module wraps the SQLite connection pool together with the
 * per-operation deadline every store call runs under.
 *
 * # Timeouts
 *
 * All store functions go through [`Database::bounded`]. When the deadline
 * passes the future is dropped and the caller gets `StoreError::Timeout`.
 * Each store operation is a single SQL statement, so a timeout never leaves
 * a partial write behind.
 */

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Default deadline for a single persistence operation
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation did not finish before the deadline
    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),

    /// The driver reported an error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Schema migration failed at startup
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A stored JSON column could not be read back
    #[error("corrupt stored value: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl StoreError {
    /// True when a unique index rejected the write
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Shared persistence handle
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
    op_timeout: Duration,
}

impl Database {
    /// Connect to a SQLite database and apply migrations
    ///
    /// The file is created if it does not exist. File databases use WAL mode.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cms_server::backend::server::database::{Database, DEFAULT_OP_TIMEOUT};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::connect("sqlite://cms.db?mode=rwc", DEFAULT_OP_TIMEOUT).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str, op_timeout: Duration) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(op_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(op_timeout)
            .connect_with(options)
            .await?;

        tracing::info!("Database connection pool created successfully");
        Self::migrate(pool, op_timeout).await
    }

    /// Create an isolated in-memory database
    ///
    /// Every call gets its own named shared-cache database, so connections in
    /// the pool see the same data but separate instances never do. The pool
    /// keeps one connection open forever; closing the last one would destroy
    /// the data.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let url = format!(
            "sqlite:file:cms_{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4()
        );
        let options = SqliteConnectOptions::from_str(&url)?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(pool, DEFAULT_OP_TIMEOUT).await
    }

    async fn migrate(pool: SqlitePool, op_timeout: Duration) -> Result<Self, StoreError> {
        tracing::debug!("Running database migrations");
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool, op_timeout })
    }

    /// Replace the per-operation deadline
    pub fn with_op_timeout(mut self, op_timeout: Duration) -> Self {
        self.op_timeout = op_timeout;
        self
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The per-operation deadline
    pub fn op_timeout(&self) -> Duration {
        self.op_timeout
    }

    /// Run one store operation under the deadline
    pub async fn bounded<T, E, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, E>>,
        StoreError: From<E>,
    {
        match tokio::time::timeout(self.op_timeout, operation).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                tracing::error!("Database operation exceeded {:?}", self.op_timeout);
                Err(StoreError::Timeout(self.op_timeout))
            }
        }
    }
}
