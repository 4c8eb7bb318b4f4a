//! In-memory group repository.
//!
//! Units of work run against a private copy of the state under a mutex and
//! are committed by swapping the copy in, so a failed unit of work leaves no
//! trace and concurrent units of work never interleave.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::Mutex;

use crate::domain::group::{Group, Membership, NewGroup};
use crate::domain::id::{GroupId, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::{GroupRepository, GroupTransaction};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    groups: BTreeMap<GroupId, Group>,
    members: BTreeMap<ProductId, GroupId>,
    last_group_id: i64,
    legacy_migrated: bool,
}

/// In-memory group repository for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemoryGroupRepository {
    state: Mutex<MemoryState>,
}

impl MemoryGroupRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed membership rows without any invariant checks.
    ///
    /// Groups referenced by the rows are not created; this lets tests build
    /// the damaged states that [`repair`](crate::application::grouping::engine::GroupingEngine::repair)
    /// is meant to fix.
    pub fn insert_raw_memberships(&self, memberships: impl IntoIterator<Item = Membership>) {
        let mut state = self.state.lock();
        for membership in memberships {
            state
                .members
                .insert(membership.product_id, membership.group_id);
        }
    }
}

impl GroupRepository for MemoryGroupRepository {
    async fn atomically<R, F>(&self, work: F) -> Result<R>
    where
        F: FnOnce(&mut dyn GroupTransaction) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let mut state = self.state.lock();
        let mut tx = MemoryTransaction {
            state: state.clone(),
        };
        let result = work(&mut tx)?;
        *state = tx.state;
        Ok(result)
    }
}

struct MemoryTransaction {
    state: MemoryState,
}

impl GroupTransaction for MemoryTransaction {
    fn group_of(&mut self, product: ProductId) -> Result<Option<GroupId>> {
        Ok(self.state.members.get(&product).copied())
    }

    fn group(&mut self, id: GroupId) -> Result<Option<Group>> {
        Ok(self.state.groups.get(&id).cloned())
    }

    fn groups(&mut self) -> Result<Vec<Group>> {
        Ok(self.state.groups.values().cloned().collect())
    }

    fn create_group(&mut self, group: &NewGroup) -> Result<GroupId> {
        self.state.last_group_id += 1;
        let id = GroupId::new(self.state.last_group_id);
        self.state.groups.insert(
            id,
            Group {
                id,
                name: group.name.clone(),
                description: group.description.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn update_group(&mut self, id: GroupId, group: &NewGroup) -> Result<bool> {
        let Some(existing) = self.state.groups.get_mut(&id) else {
            return Ok(false);
        };
        existing.name = group.name.clone();
        existing.description = group.description.clone();
        Ok(true)
    }

    fn delete_group(&mut self, id: GroupId) -> Result<bool> {
        self.state.members.retain(|_, group| *group != id);
        Ok(self.state.groups.remove(&id).is_some())
    }

    fn add_member(&mut self, product: ProductId, group: GroupId) -> Result<()> {
        if !self.state.groups.contains_key(&group) {
            return Err(Error::Storage(format!(
                "FOREIGN KEY constraint failed: group {group} does not exist"
            )));
        }
        if let Some(existing) = self.state.members.get(&product) {
            return Err(Error::Storage(format!(
                "UNIQUE constraint failed: product {product} already in group {existing}"
            )));
        }
        self.state.members.insert(product, group);
        Ok(())
    }

    fn remove_member(&mut self, product: ProductId) -> Result<Option<GroupId>> {
        Ok(self.state.members.remove(&product))
    }

    fn move_members(&mut self, from: GroupId, to: GroupId) -> Result<usize> {
        if !self.state.groups.contains_key(&to) {
            return Err(Error::Storage(format!(
                "FOREIGN KEY constraint failed: group {to} does not exist"
            )));
        }
        let mut moved = 0;
        for group in self.state.members.values_mut() {
            if *group == from {
                *group = to;
                moved += 1;
            }
        }
        Ok(moved)
    }

    fn members(&mut self, group: GroupId) -> Result<Vec<ProductId>> {
        Ok(self
            .state
            .members
            .iter()
            .filter(|(_, g)| **g == group)
            .map(|(product, _)| *product)
            .collect())
    }

    fn member_count(&mut self, group: GroupId) -> Result<usize> {
        Ok(self.state.members.values().filter(|g| **g == group).count())
    }

    fn memberships(&mut self) -> Result<Vec<Membership>> {
        Ok(self
            .state
            .members
            .iter()
            .map(|(product, group)| Membership::new(*product, *group))
            .collect())
    }

    fn membership_count(&mut self) -> Result<usize> {
        Ok(self.state.members.len())
    }

    fn legacy_migration_recorded(&mut self) -> Result<bool> {
        Ok(self.state.legacy_migrated)
    }

    fn record_legacy_migration(&mut self) -> Result<()> {
        self.state.legacy_migrated = true;
        Ok(())
    }
}
