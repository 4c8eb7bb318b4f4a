//! Group and membership records.
//!
//! A [`Group`] is the persisted equivalence class of mutually substitutable
//! products. A [`Membership`] ties one product to its (single) group.
//!
//! The central invariant is that a group never outlives a mutation with
//! fewer than two members; see [`MIN_GROUP_MEMBERS`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{GroupId, ProductId};

/// Smallest membership a group may have once a mutation completes.
pub const MIN_GROUP_MEMBERS: usize = 2;

/// A persisted group of alternative products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Store-assigned identifier.
    pub id: GroupId,
    /// Optional display name.
    pub name: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Metadata for a group that is about to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGroup {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The single-valued relation from a product to its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Membership {
    pub product_id: ProductId,
    pub group_id: GroupId,
}

impl Membership {
    #[must_use]
    pub const fn new(product_id: ProductId, group_id: GroupId) -> Self {
        Self {
            product_id,
            group_id,
        }
    }
}

/// A group together with its current members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group: Group,
    /// Member products in ascending id order.
    pub members: Vec<ProductId>,
}

impl GroupSummary {
    /// Number of products in the group.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Check whether the group satisfies the minimum-membership invariant.
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.members.len() >= MIN_GROUP_MEMBERS
    }
}

/// Collect memberships into `group -> members`, members sorted ascending.
#[must_use]
pub fn members_by_group(
    memberships: impl IntoIterator<Item = Membership>,
) -> BTreeMap<GroupId, Vec<ProductId>> {
    let mut groups: BTreeMap<GroupId, Vec<ProductId>> = BTreeMap::new();
    for membership in memberships {
        groups
            .entry(membership.group_id)
            .or_default()
            .push(membership.product_id);
    }
    for members in groups.values_mut() {
        members.sort_unstable();
    }
    groups
}
