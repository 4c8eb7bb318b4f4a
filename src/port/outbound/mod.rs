//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the persistence the grouping engine depends on:
//! the membership store and group registry, the legacy link table, and the
//! product catalog.

pub mod catalog;
pub mod legacy;
pub mod store;
