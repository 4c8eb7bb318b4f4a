//! Alternative product grouping.
//!
//! - [`engine`]: connect, disconnect, merge and repair over the group store
//! - [`migrator`]: one-shot rebuild from legacy pairwise links
//! - [`mirror`]: dual-write facade for the legacy table
//! - [`view`]: display clusters for a catalog slice

pub mod engine;
pub mod migrator;
pub mod mirror;
pub mod view;
