//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod grouping;
pub mod operator;
pub mod output;
pub mod paths;
