//! Order DAO.
//!
//! An insert with a dangling user or product reference surfaces as the
//! engine's foreign-key violation, untouched.

use chrono::{DateTime, Utc};
use minishop_core::{OrderId, ProductId, Quantity, UserId};
use sqlx::FromRow;

use super::{RepositoryError, Session, dao};
use crate::models::{NewOrder, Order};

/// Database row representation of an order.
#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i32,
    is_hidden: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let quantity = Quantity::new(row.quantity).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid quantity in database: {e}"))
        })?;

        Ok(Self {
            id: OrderId::new(row.id),
            user_id: UserId::new(row.user_id),
            product_id: ProductId::new(row.product_id),
            quantity,
            is_hidden: row.is_hidden,
            created_at: row.created_at,
        })
    }
}

/// DAO for the `orders` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderDao;

impl OrderDao {
    /// Create a new order DAO.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Insert an order and return the stored row, id included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails; a
    /// non-existent user or product shows up as a foreign-key violation
    /// from the engine.
    pub async fn create(
        &self,
        order: &NewOrder,
        session: &mut Session,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, product_id, quantity, is_hidden, created_at
            ",
        )
        .bind(order.user_id.as_i64())
        .bind(order.product_id.as_i64())
        .bind(order.quantity)
        .fetch_one(session.conn())
        .await?;

        row.try_into()
    }

    /// All orders placed by one user, hidden ones included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_user(
        &self,
        user_id: UserId,
        session: &mut Session,
    ) -> Result<Vec<Order>, RepositoryError> {
        let query = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, user_id, product_id, quantity, is_hidden, created_at
            FROM orders
            WHERE user_id = $1
            ",
        )
        .bind(user_id.as_i64());

        let rows = dao::fetch_all(session.conn(), query).await?;
        rows.into_iter().map(Order::try_from).collect()
    }

    /// Soft-delete an order. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn hide(&self, id: OrderId, session: &mut Session) -> Result<bool, RepositoryError> {
        self.set_hidden(id, true, session).await
    }

    /// Restore a hidden order. Returns `false` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn unhide(
        &self,
        id: OrderId,
        session: &mut Session,
    ) -> Result<bool, RepositoryError> {
        self.set_hidden(id, false, session).await
    }

    async fn set_hidden(
        &self,
        id: OrderId,
        hidden: bool,
        session: &mut Session,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE orders SET is_hidden = $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(hidden)
            .execute(session.conn())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
