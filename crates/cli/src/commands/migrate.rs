//! Database migration command.
//!
//! Connects with the same `POSTGRES_*` environment variables the store
//! uses and applies the embedded migrations.

use minishop_store::config::{ConfigError, DatabaseConfig};
use minishop_store::db::{Db, RepositoryError};

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns [`MigrationError`] if the configuration is incomplete, the
/// database is unreachable, or a migration fails.
pub async fn all() -> Result<(), MigrationError> {
    let config = DatabaseConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Db::connect(&config).await?;

    tracing::info!("Running migrations...");
    db.migrate().await?;

    tracing::info!("Migrations complete!");
    db.close().await;
    Ok(())
}
