//! In-memory adapters for every outbound port.
//!
//! Used by tests and by callers that embed the engine without a database.

pub mod catalog;
pub mod legacy;
pub mod store;
