//! Minishop Core - Shared types library.
//!
//! This crate provides the common types used across the Minishop
//! components:
//!
//! - `store` - The data-access layer and demo driver
//! - `cli` - Command-line tool for migrations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. Field
//! constraints (minimum values, maximum lengths) are enforced when a value
//! is constructed, so a `Price` or `Quantity` that exists is always valid.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and
//!   quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
