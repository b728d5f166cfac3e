//! User domain types.

use chrono::{DateTime, Utc};
use minishop_core::{Email, UserId};
use thiserror::Error;

/// Errors that can occur when constructing a [`NewUser`].
#[derive(Debug, Error, Clone)]
pub enum NewUserError {
    /// The display name is empty.
    #[error("full name cannot be empty")]
    NameEmpty,
    /// The display name is too long for the column.
    #[error("full name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Input for creating a user. No identity yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Unique email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
}

impl NewUser {
    /// Maximum length of the display name (matches the VARCHAR(255) column).
    pub const MAX_NAME_LENGTH: usize = 255;

    /// Create a validated `NewUser`.
    ///
    /// The email carries its own constraints from [`Email::parse`]; only
    /// the display name is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`NewUserError`] if the name is empty or longer than 255
    /// characters.
    pub fn new(email: Email, full_name: impl Into<String>) -> Result<Self, NewUserError> {
        let full_name = full_name.into();
        if full_name.is_empty() {
            return Err(NewUserError::NameEmpty);
        }
        if full_name.len() > Self::MAX_NAME_LENGTH {
            return Err(NewUserError::NameTooLong {
                max: Self::MAX_NAME_LENGTH,
            });
        }
        Ok(Self { email, full_name })
    }
}

/// A stored user, as returned by the DAO.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned id.
    pub id: UserId,
    /// Unique email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Soft-delete flag; hidden users stay in the table.
    pub is_hidden: bool,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}
