//! Integration tests for Minishop.
//!
//! # Running Tests
//!
//! The tests need a live `PostgreSQL` and are `#[ignore]`d by default:
//!
//! ```bash
//! # Point the tests at a throwaway database
//! export MINISHOP_TEST_HOST=localhost
//! export MINISHOP_TEST_PORT=5432
//! export MINISHOP_TEST_USER=postgres
//! export MINISHOP_TEST_PASSWORD=postgres
//! export MINISHOP_TEST_DB=minishop_test
//!
//! cargo test -p minishop-integration-tests -- --ignored
//! ```
//!
//! Most tests run their whole scenario inside one session that is
//! dropped at the end, so the transaction rolls back and nothing
//! persists. Tests that must observe behaviour across commits clean up
//! after themselves through the raw pool.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;

use minishop_core::Email;
use minishop_store::config::DatabaseConfig;
use minishop_store::db::{Db, RepositoryError};

/// A connected test database with the schema applied.
pub struct TestContext {
    /// The shared engine under test.
    pub db: Db,
}

impl TestContext {
    /// Connect using the `MINISHOP_TEST_*` environment variables
    /// (defaulting to a local `postgres/postgres` instance) and run the
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the database is unreachable or the
    /// migrations fail.
    pub async fn connect() -> Result<Self, RepositoryError> {
        let config = DatabaseConfig {
            host: test_var("MINISHOP_TEST_HOST", "localhost"),
            port: test_var("MINISHOP_TEST_PORT", "5432"),
            user: test_var("MINISHOP_TEST_USER", "postgres"),
            password: test_var("MINISHOP_TEST_PASSWORD", "postgres"),
            database: test_var("MINISHOP_TEST_DB", "minishop_test"),
            echo: false,
        };

        let db = Db::connect(&config).await?;
        db.migrate().await?;
        Ok(Self { db })
    }
}

fn test_var(key: &str, default: &str) -> SecretString {
    SecretString::from(std::env::var(key).unwrap_or_else(|_| default.to_string()))
}

/// An email address no other test run will have used.
///
/// # Panics
///
/// Panics if the generated address does not parse, which cannot happen.
#[must_use]
pub fn unique_email(prefix: &str) -> Email {
    let address = format!("{prefix}-{}@test.example.com", uuid::Uuid::new_v4());
    Email::parse(&address).expect("generated email is always valid")
}
