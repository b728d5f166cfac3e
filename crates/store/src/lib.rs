//! Minishop store library.
//!
//! A small, layered data-access example: environment configuration, a
//! shared connection pool with scoped sessions, and one DAO per entity
//! (users, products, orders) with soft-delete support.
//!
//! The crate is a library so the DAO layer can be exercised from the
//! integration tests as well as from the demo binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
