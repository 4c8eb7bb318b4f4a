//! Trait definitions (hexagonal ports).
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (databases, the product catalog). Outbound ports depend only on
//! the domain; inbound ports expose application use cases to drivers.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │   (GroupingEngine,      │
//!     ┌──────────────┤    LegacyMigrator)      ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Catalog │            │   Group     │              │  Legacy   │
//! │ Adapter │            │ Repository  │              │   Links   │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod inbound;
pub mod outbound;
