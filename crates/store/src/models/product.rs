//! Product domain types.

use chrono::{DateTime, Utc};
use minishop_core::{Price, ProductId};
use thiserror::Error;

/// Errors that can occur when constructing a [`NewProduct`].
#[derive(Debug, Error, Clone)]
pub enum NewProductError {
    /// The product name is empty.
    #[error("product name cannot be empty")]
    NameEmpty,
    /// The product name is too long for the column.
    #[error("product name must be at most {max} characters")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Input for creating a product. No identity yet.
///
/// The price is already non-negative by construction ([`Price::new`]).
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Non-negative price.
    pub price: Price,
}

impl NewProduct {
    /// Maximum length of the product name (matches the VARCHAR(255) column).
    pub const MAX_NAME_LENGTH: usize = 255;

    /// Create a validated `NewProduct`.
    ///
    /// # Errors
    ///
    /// Returns [`NewProductError`] if the name is empty or longer than
    /// 255 characters.
    pub fn new(name: impl Into<String>, price: Price) -> Result<Self, NewProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NewProductError::NameEmpty);
        }
        if name.len() > Self::MAX_NAME_LENGTH {
            return Err(NewProductError::NameTooLong {
                max: Self::MAX_NAME_LENGTH,
            });
        }
        Ok(Self { name, price })
    }
}

/// A stored product, as returned by the DAO.
#[derive(Debug, Clone)]
pub struct Product {
    /// Database-assigned id.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Non-negative price.
    pub price: Price,
    /// Soft-delete flag; hidden products stay in the table and keep
    /// their orders.
    pub is_hidden: bool,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}
