//! Inbound (driving) ports consumed by inbound adapters.
//!
//! Inbound ports expose application capabilities to external drivers such
//! as the command-line interface.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for grouping and configuration

pub mod operator;
