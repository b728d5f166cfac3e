//! Product DAO.

use chrono::{DateTime, Utc};
use minishop_core::{Price, ProductId};
use rust_decimal::Decimal;
use sqlx::FromRow;

use super::{RepositoryError, Session, dao};
use crate::models::{NewProduct, Product};

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: Decimal,
    is_hidden: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            price,
            is_hidden: row.is_hidden,
            created_at: row.created_at,
        })
    }
}

/// DAO for the `products` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductDao;

impl ProductDao {
    /// Create a new product DAO.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Insert a product and return the stored row, id included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        product: &NewProduct,
        session: &mut Session,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price, is_hidden, created_at
            ",
        )
        .bind(product.name.as_str())
        .bind(product.price)
        .fetch_one(session.conn())
        .await?;

        row.try_into()
    }

    /// List every product, hidden ones included.
    ///
    /// No ordering is applied; rows come back in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_all(&self, session: &mut Session) -> Result<Vec<Product>, RepositoryError> {
        let query = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, is_hidden, created_at
            FROM products
            ",
        );

        let rows = dao::fetch_all(session.conn(), query).await?;
        rows.into_iter().map(Product::try_from).collect()
    }

    /// Soft-delete a product. Returns `false` if the id does not exist.
    ///
    /// Orders referencing the product are untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn hide(
        &self,
        id: ProductId,
        session: &mut Session,
    ) -> Result<bool, RepositoryError> {
        self.set_hidden(id, true, session).await
    }

    /// Restore a hidden product. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn unhide(
        &self,
        id: ProductId,
        session: &mut Session,
    ) -> Result<bool, RepositoryError> {
        self.set_hidden(id, false, session).await
    }

    async fn set_hidden(
        &self,
        id: ProductId,
        hidden: bool,
        session: &mut Session,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE products SET is_hidden = $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(hidden)
            .execute(session.conn())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
