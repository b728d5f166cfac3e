//! User DAO.
//!
//! All queries are plain parameterized SQL executed inside the caller's
//! [`Session`]; nothing here commits. A duplicate email surfaces as the
//! engine's uniqueness violation, untouched.

use chrono::{DateTime, Utc};
use minishop_core::{Email, UserId};
use sqlx::FromRow;

use super::{RepositoryError, Session, dao};
use crate::models::{NewUser, User};

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    full_name: String,
    is_hidden: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            email,
            full_name: row.full_name,
            is_hidden: row.is_hidden,
            created_at: row.created_at,
        })
    }
}

/// DAO for the `users` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDao;

impl UserDao {
    /// Create a new user DAO.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Insert a user and return the stored row, id included.
    ///
    /// The insert is visible within the session immediately but durable
    /// only once the session commits.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails; a
    /// duplicate email shows up as a uniqueness violation from the
    /// engine.
    pub async fn create(
        &self,
        user: &NewUser,
        session: &mut Session,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (email, full_name)
            VALUES ($1, $2)
            RETURNING id, email, full_name, is_hidden, created_at
            ",
        )
        .bind(user.email.as_str())
        .bind(user.full_name.as_str())
        .fetch_one(session.conn())
        .await?;

        row.try_into()
    }

    /// Look a user up by exact email. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(
        &self,
        email: &Email,
        session: &mut Session,
    ) -> Result<Option<User>, RepositoryError> {
        let query = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, full_name, is_hidden, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email.as_str());

        let row = dao::fetch_one(session.conn(), query).await?;
        row.map(User::try_from).transpose()
    }

    /// Soft-delete a user. Returns `false` if the id does not exist.
    ///
    /// Idempotent: hiding an already-hidden user succeeds and still
    /// returns `true`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn hide(&self, id: UserId, session: &mut Session) -> Result<bool, RepositoryError> {
        self.set_hidden(id, true, session).await
    }

    /// Restore a hidden user. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn unhide(&self, id: UserId, session: &mut Session) -> Result<bool, RepositoryError> {
        self.set_hidden(id, false, session).await
    }

    async fn set_hidden(
        &self,
        id: UserId,
        hidden: bool,
        session: &mut Session,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE users SET is_hidden = $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(hidden)
            .execute(session.conn())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
