//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic. This layer handles configuration, store wiring, and the
//! operator implementation behind the CLI.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for store and engine wiring
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - CLI operator interface

pub mod bootstrap;
pub mod config;
pub mod operator;
