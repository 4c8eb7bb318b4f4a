//! Persistence ports for groups and memberships.
//!
//! The grouping engine never talks to a table directly. Every mutation is a
//! closure over a [`GroupTransaction`], handed to
//! [`GroupRepository::atomically`], which runs it as one serialized unit of
//! work: either all of its writes become visible or none do.

use std::future::Future;

use crate::domain::group::{Group, Membership, NewGroup};
use crate::domain::id::{GroupId, ProductId};
use crate::error::Result;

/// Primitive reads and writes available inside a unit of work.
///
/// Implementations must keep at most one membership per product. Inserting a
/// second membership for a product is a storage error, not an overwrite.
pub trait GroupTransaction {
    /// Group containing `product`, if any.
    fn group_of(&mut self, product: ProductId) -> Result<Option<GroupId>>;

    /// Load a group record.
    fn group(&mut self, id: GroupId) -> Result<Option<Group>>;

    /// All group records, ascending by id.
    fn groups(&mut self) -> Result<Vec<Group>>;

    /// Create an empty group and return its id.
    fn create_group(&mut self, group: &NewGroup) -> Result<GroupId>;

    /// Replace a group's name and description. Returns false if missing.
    fn update_group(&mut self, id: GroupId, group: &NewGroup) -> Result<bool>;

    /// Delete a group together with any membership rows still pointing at it.
    /// Returns false if the group did not exist.
    fn delete_group(&mut self, id: GroupId) -> Result<bool>;

    /// Insert a membership row.
    fn add_member(&mut self, product: ProductId, group: GroupId) -> Result<()>;

    /// Delete the membership of `product`, returning the group it left.
    fn remove_member(&mut self, product: ProductId) -> Result<Option<GroupId>>;

    /// Re-point every membership of `from` at `to`. Returns rows moved.
    fn move_members(&mut self, from: GroupId, to: GroupId) -> Result<usize>;

    /// Members of a group, ascending.
    fn members(&mut self, group: GroupId) -> Result<Vec<ProductId>>;

    /// Number of members of a group.
    fn member_count(&mut self, group: GroupId) -> Result<usize>;

    /// The full membership relation.
    fn memberships(&mut self) -> Result<Vec<Membership>>;

    /// Total number of membership rows.
    fn membership_count(&mut self) -> Result<usize>;

    /// Whether the legacy link migration has been recorded as complete.
    fn legacy_migration_recorded(&mut self) -> Result<bool>;

    /// Record the legacy link migration as complete. Idempotent.
    fn record_legacy_migration(&mut self) -> Result<()>;
}

/// Transactional access to the membership store and group registry.
pub trait GroupRepository: Send + Sync {
    /// Run `work` as a single serialized unit of work.
    ///
    /// Commits when `work` returns `Ok`, rolls back when it returns `Err`.
    /// Concurrent units of work touching the same rows never interleave.
    fn atomically<R, F>(&self, work: F) -> impl Future<Output = Result<R>> + Send
    where
        F: FnOnce(&mut dyn GroupTransaction) -> Result<R> + Send + 'static,
        R: Send + 'static;
}
