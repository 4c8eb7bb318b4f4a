//! Infrastructure configuration modules.

pub mod database;
pub mod grouping;
pub mod logging;
pub mod settings;
