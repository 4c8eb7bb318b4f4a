//! Alternates - persistent grouping of substitutable catalog products.
//!
//! Products that can stand in for each other are kept in groups. Sharing a
//! group is what makes two products alternatives, so the relation stays an
//! equivalence relation: connecting products unions their groups, and a
//! group never survives with fewer than two members.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Ids, groups, memberships, connected components and the
//!   cluster view builder. No framework imports.
//! - **`port`** - Storage contracts (`GroupRepository`, `LegacyLinkStore`,
//!   `ProductCatalog`) and the operator surface consumed by the CLI.
//! - **`application`** - `GroupingEngine`, `LegacyMigrator`, `LegacyMirror`.
//! - **`adapter`** - SQLite (Diesel) and in-memory stores, and the CLI.
//! - **`infrastructure`** - Configuration, logging, and wiring.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use alternates::adapter::outbound::memory::store::MemoryGroupRepository;
//! use alternates::application::grouping::engine::GroupingEngine;
//! use alternates::domain::id::ProductId;
//!
//! # async fn demo() -> alternates::error::Result<()> {
//! let engine = GroupingEngine::new(Arc::new(MemoryGroupRepository::new()));
//! engine.connect_products(ProductId::new(1), ProductId::new(2)).await?;
//! assert_eq!(engine.get_alternatives(ProductId::new(1)).await?, vec![ProductId::new(2)]);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
