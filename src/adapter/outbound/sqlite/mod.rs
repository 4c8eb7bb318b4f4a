//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the group repository, the
//! legacy link store, and the product catalog using Diesel ORM.

pub mod catalog;
pub mod database;
pub mod legacy;
pub mod store;
