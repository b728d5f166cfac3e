//! Database access for the minishop example.
//!
//! # Tables
//!
//! - `users` - Accounts with a unique email and a soft-delete flag
//! - `products` - Items that can be ordered
//! - `orders` - One user ordering one product, some quantity of times
//!
//! # Layering
//!
//! - [`Db`] owns the process-wide connection pool and hands out scoped
//!   [`Session`]s
//! - [`dao`] holds the fetch helpers shared by the entity DAOs
//! - [`UserDao`], [`ProductDao`], [`OrderDao`] wrap the per-entity SQL
//!
//! # Migrations
//!
//! Migrations live in `migrations/` at the workspace root and are
//! embedded via `sqlx::migrate!`. Run them with [`Db::migrate`] or:
//! ```bash
//! cargo run -p minishop-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgConnection, PgPool, Postgres, Transaction};
use thiserror::Error;

use crate::config::DatabaseConfig;

pub(crate) mod dao;
pub mod orders;
pub mod products;
pub mod users;

pub use orders::OrderDao;
pub use products::ProductDao;
pub use users::UserDao;

/// Embedded migrations (workspace-root `migrations/` directory).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Errors surfaced by the connection manager and the DAO layer.
///
/// Not-found conditions are never errors: lookups return `Option` and
/// `hide`/`unhide` return `bool`. Constraint violations (duplicate
/// email, dangling foreign key) propagate unmodified inside
/// [`Database`](Self::Database); callers that care can probe them via
/// [`is_unique_violation`](Self::is_unique_violation).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database operation failed (connectivity, constraint violation, ...).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Running the embedded migrations failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row violates an invariant the types enforce.
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// A session was requested after the pool was disposed.
    #[error("Session factory unavailable: the connection pool has been closed")]
    SessionFactoryClosed,
}

impl RepositoryError {
    /// Whether this error is a uniqueness-constraint violation.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::Database(e)) if e.is_unique_violation())
    }

    /// Whether this error is a foreign-key-constraint violation.
    #[must_use]
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::Database(e)) if e.is_foreign_key_violation())
    }
}

/// The shared database engine.
///
/// Owns the one long-lived `PgPool` for the process. Construct it once in
/// `main` and pass it by reference to whatever needs database access; the
/// pool itself is safe for concurrent use by any number of sessions.
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Connect to the database described by `config`.
    ///
    /// The `echo` flag maps onto sqlx statement logging: when set, every
    /// statement is logged at info level.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the URL does not parse or
    /// the pool cannot reach the server.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let options: PgConnectOptions = config.url().expose_secret().parse()?;
        let options = if config.echo {
            options.log_statements(log::LevelFilter::Info)
        } else {
            options.disable_statement_logging()
        };

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        tracing::info!("Database pool created");
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a scoped session (one transaction).
    ///
    /// The session must stay confined to one logical flow of control.
    /// Dropping it without [`Session::commit`] rolls the transaction
    /// back, on every exit path including cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::SessionFactoryClosed`] if the pool has
    /// already been disposed via [`close`](Self::close), and
    /// [`RepositoryError::Database`] if a connection cannot be acquired.
    pub async fn session(&self) -> Result<Session, RepositoryError> {
        if self.pool.is_closed() {
            return Err(RepositoryError::SessionFactoryClosed);
        }
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Create the schema if absent by running the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Migration`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Dispose the pool. Idempotent; later [`session`](Self::session)
    /// calls fail with [`RepositoryError::SessionFactoryClosed`].
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// A scoped unit of work: one transaction on one pooled connection.
///
/// All DAO operations run against a session; their effects become visible
/// to the caller immediately (within the transaction) but durable only at
/// [`commit`](Self::commit). The drop guard of the inner transaction
/// guarantees rollback-then-close when a session ends any other way.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// The connection the session's statements execute on.
    pub(crate) fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit everything done through this session as one atomic batch.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the commit fails; the
    /// transaction is rolled back in that case.
    pub async fn commit(self) -> Result<(), RepositoryError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Explicitly roll back. Equivalent to dropping the session, but
    /// surfaces rollback errors instead of swallowing them.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the rollback fails.
    pub async fn rollback(self) -> Result<(), RepositoryError> {
        self.tx.rollback().await?;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
