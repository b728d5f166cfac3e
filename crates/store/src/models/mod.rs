//! Domain models.
//!
//! Each entity comes as a pair of related but distinct value types: a
//! `New*` input type without identity (validated at construction) and a
//! stored type carrying the database-assigned id and the soft-delete
//! flag. Composition, not inheritance.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order};
pub use product::{NewProduct, NewProductError, Product};
pub use user::{NewUser, NewUserError, User};
