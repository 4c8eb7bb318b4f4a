//! Storage-agnostic domain types and algorithms.
//!
//! - [`id`]: `ProductId` and `GroupId` newtypes
//! - [`group`]: groups, memberships and the minimum-membership rule
//! - [`link`]: the deprecated pairwise alternative relation
//! - [`component`]: connected components over product pairs
//! - [`alternatives`]: product to co-members adjacency
//! - [`cluster`]: display clusters for a catalog slice

pub mod alternatives;
pub mod cluster;
pub mod component;
pub mod group;
pub mod id;
pub mod link;
