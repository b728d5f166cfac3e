//! Order quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum QuantityError {
    /// Quantities start at one.
    #[error("quantity must be at least 1 (got {0})")]
    TooSmall(i32),
}

/// How many units of a product an order covers.
///
/// Always at least 1; an order for zero units is not a thing. Defaults
/// to 1, matching the column default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    /// A quantity of one, the default for new orders.
    pub const ONE: Self = Self(1);

    /// Create a new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::TooSmall`] if `count` is below 1.
    pub const fn new(count: i32) -> Result<Self, QuantityError> {
        if count < 1 {
            return Err(QuantityError::TooSmall(count));
        }
        Ok(Self(count))
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Quantity {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Quantity {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let count = <i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid (CHECK constraint)
        Ok(Self(count))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Quantity {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert_eq!(Quantity::new(1).unwrap().as_i32(), 1);
        assert_eq!(Quantity::new(20).unwrap().as_i32(), 20);
    }

    #[test]
    fn test_new_rejects_below_one() {
        assert!(matches!(Quantity::new(0), Err(QuantityError::TooSmall(0))));
        assert!(matches!(
            Quantity::new(-5),
            Err(QuantityError::TooSmall(-5))
        ));
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(Quantity::default(), Quantity::ONE);
    }

    #[test]
    fn test_serde_transparent() {
        let qty = Quantity::new(3).unwrap();
        let json = serde_json::to_string(&qty).unwrap();
        assert_eq!(json, "3");

        let parsed: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, qty);
    }
}
