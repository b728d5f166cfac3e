//! Order domain types.

use chrono::{DateTime, Utc};
use minishop_core::{OrderId, ProductId, Quantity, UserId};

/// Input for creating an order. No identity yet.
///
/// Both references must point at existing rows when the order is
/// created; the database enforces this with foreign keys. The quantity
/// defaults to one and is at least one by construction.
#[derive(Debug, Clone, Copy)]
pub struct NewOrder {
    /// The ordering user.
    pub user_id: UserId,
    /// The ordered product.
    pub product_id: ProductId,
    /// How many units; defaults to 1.
    pub quantity: Quantity,
}

impl NewOrder {
    /// Create an order for one unit of a product.
    #[must_use]
    pub fn new(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            user_id,
            product_id,
            quantity: Quantity::default(),
        }
    }

    /// Override the quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }
}

/// A stored order, as returned by the DAO.
///
/// Hiding the referenced user or product does not touch the order; the
/// references stay valid either way (no cascade).
#[derive(Debug, Clone)]
pub struct Order {
    /// Database-assigned id.
    pub id: OrderId,
    /// The ordering user.
    pub user_id: UserId,
    /// The ordered product.
    pub product_id: ProductId,
    /// How many units.
    pub quantity: Quantity,
    /// Soft-delete flag.
    pub is_hidden: bool,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_defaults_to_one_unit() {
        let order = NewOrder::new(UserId::new(1), ProductId::new(2));
        assert_eq!(order.quantity, Quantity::ONE);
    }

    #[test]
    fn test_with_quantity() {
        let order = NewOrder::new(UserId::new(1), ProductId::new(2))
            .with_quantity(Quantity::new(5).unwrap());
        assert_eq!(order.quantity.as_i32(), 5);
    }
}
