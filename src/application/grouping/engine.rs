//! The grouping engine: connect, disconnect and merge over the group store.
//!
//! Products that share a group are alternatives of each other. The engine
//! keeps that relation an equivalence relation by construction:
//!
//! - a product belongs to at most one group (single membership),
//! - a group never keeps fewer than two members once an operation returns,
//! - groups are only ever combined through [`merge_in`], the single
//!   chokepoint that behaves like a persisted union-find `union`.
//!
//! Every operation is one unit of work on the [`GroupRepository`]; the
//! engine itself keeps no in-memory state and holds no lock across a
//! storage call.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::alternatives::AlternativesMap;
use crate::domain::group::{members_by_group, Group, GroupSummary, NewGroup, MIN_GROUP_MEMBERS};
use crate::domain::id::{GroupId, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::catalog::{OpenCatalog, ProductCatalog};
use crate::port::outbound::store::{GroupRepository, GroupTransaction};

/// Behaviour switches supplied by the integrating system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingPolicy {
    /// Check product ids against the catalog before touching the store.
    pub verify_products: bool,
}

/// What a successful connect did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConnectOutcome {
    /// Neither product was grouped; a new group holds both.
    Created { group: GroupId },
    /// One product joined the other's group.
    Joined { group: GroupId, product: ProductId },
    /// Both products already shared a group.
    AlreadyConnected { group: GroupId },
    /// Two groups were merged; `absorbed` no longer exists.
    Merged {
        group: GroupId,
        absorbed: GroupId,
        moved: usize,
    },
}

impl ConnectOutcome {
    /// The group both products belong to afterwards.
    #[must_use]
    pub const fn group(&self) -> GroupId {
        match *self {
            Self::Created { group }
            | Self::Joined { group, .. }
            | Self::AlreadyConnected { group }
            | Self::Merged { group, .. } => group,
        }
    }
}

/// What a successful disconnect did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DisconnectOutcome {
    /// The product was not in any group.
    NotGrouped,
    /// The product left a group that still has `remaining` members.
    Left { group: GroupId, remaining: usize },
    /// The group dropped below two members and was deleted; `released`
    /// lists the products that lost their membership with it.
    Dissolved {
        group: GroupId,
        released: Vec<ProductId>,
    },
}

/// Result of a consistency pass over the group store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    /// Membership rows that pointed at a group missing from the registry.
    pub dangling_memberships: usize,
    /// Groups deleted for having fewer than two members.
    pub groups_dissolved: usize,
    /// Products whose membership went away with a dissolved group.
    pub products_released: usize,
}

impl RepairReport {
    /// Whether the pass found nothing to fix.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Grouping engine over a group repository and a product catalog.
pub struct GroupingEngine<R, C = OpenCatalog> {
    repository: Arc<R>,
    catalog: Arc<C>,
    policy: GroupingPolicy,
}

impl<R, C> Clone for GroupingEngine<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            catalog: Arc::clone(&self.catalog),
            policy: self.policy,
        }
    }
}

impl<R: GroupRepository> GroupingEngine<R> {
    /// Create an engine without product existence checks.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_catalog(repository, Arc::new(OpenCatalog), GroupingPolicy::default())
    }
}

impl<R: GroupRepository, C: ProductCatalog> GroupingEngine<R, C> {
    /// Create an engine backed by `catalog` for existence checks and removal.
    pub fn with_catalog(repository: Arc<R>, catalog: Arc<C>, policy: GroupingPolicy) -> Self {
        Self {
            repository,
            catalog,
            policy,
        }
    }

    /// The underlying repository.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// The active policy.
    pub fn policy(&self) -> GroupingPolicy {
        self.policy
    }

    /// The group containing `product`, if any.
    ///
    /// With product verification enabled, an unknown product is `NotFound`.
    pub async fn get_product_group(&self, product: ProductId) -> Result<Option<GroupId>> {
        self.require_product(product).await?;
        self.repository
            .atomically(move |tx| tx.group_of(product))
            .await
    }

    /// Make `first` and `second` alternatives of each other.
    ///
    /// Idempotent. When both products are already grouped in different
    /// groups, the group of `first` absorbs the group of `second`.
    pub async fn connect_products(
        &self,
        first: ProductId,
        second: ProductId,
    ) -> Result<ConnectOutcome> {
        if first == second {
            return Err(Error::InvalidOperation(format!(
                "product {first} cannot be an alternative of itself"
            )));
        }
        self.require_product(first).await?;
        self.require_product(second).await?;

        let outcome = self
            .repository
            .atomically(move |tx| connect_in(tx, first, second))
            .await?;

        match outcome {
            ConnectOutcome::Created { group } => {
                info!(%first, %second, %group, "Created alternative group");
            }
            ConnectOutcome::Joined { group, product } => {
                debug!(%product, %group, "Product joined alternative group");
            }
            ConnectOutcome::AlreadyConnected { group } => {
                debug!(%first, %second, %group, "Products already connected");
            }
            ConnectOutcome::Merged {
                group,
                absorbed,
                moved,
            } => {
                info!(%group, %absorbed, moved, "Merged alternative groups");
            }
        }

        Ok(outcome)
    }

    /// Remove `product` from its group.
    ///
    /// If fewer than two members remain, the group and its last membership
    /// are deleted. Remaining members of a larger group stay together; the
    /// engine does not re-check whether they are still linked to each other
    /// without the removed product.
    pub async fn disconnect_product(&self, product: ProductId) -> Result<DisconnectOutcome> {
        if self.policy.verify_products && !self.catalog.exists(product).await? {
            return Err(Error::InvalidOperation(format!(
                "cannot disconnect unknown product {product}"
            )));
        }

        let outcome = self
            .repository
            .atomically(move |tx| disconnect_in(tx, product))
            .await?;

        match &outcome {
            DisconnectOutcome::NotGrouped => {
                debug!(%product, "Product was not grouped");
            }
            DisconnectOutcome::Left { group, remaining } => {
                debug!(%product, %group, remaining, "Product left alternative group");
            }
            DisconnectOutcome::Dissolved { group, released } => {
                info!(%product, %group, released = released.len(), "Dissolved alternative group");
            }
        }

        Ok(outcome)
    }

    /// Move every member of `from` into `into` and delete `from`.
    ///
    /// Returns the number of memberships moved. Both groups must exist.
    /// Merging a group with itself is a no-op.
    pub async fn merge_groups(&self, into: GroupId, from: GroupId) -> Result<usize> {
        let moved = self
            .repository
            .atomically(move |tx| {
                for id in [into, from] {
                    if tx.group(id)?.is_none() {
                        return Err(Error::group_not_found(id));
                    }
                }
                merge_in(tx, into, from)
            })
            .await?;

        if into != from {
            info!(%into, %from, moved, "Merged alternative groups");
        }
        Ok(moved)
    }

    /// For every grouped product, its co-members excluding itself.
    pub async fn get_all_alternatives_map(&self) -> Result<AlternativesMap> {
        let memberships = self
            .repository
            .atomically(|tx| tx.memberships())
            .await?;
        Ok(AlternativesMap::from_memberships(memberships))
    }

    /// Co-members of `product`, ascending. Empty when ungrouped.
    pub async fn get_alternatives(&self, product: ProductId) -> Result<Vec<ProductId>> {
        self.require_product(product).await?;
        self.repository
            .atomically(move |tx| {
                let Some(group) = tx.group_of(product)? else {
                    return Ok(Vec::new());
                };
                let mut members = tx.members(group)?;
                members.retain(|&member| member != product);
                Ok(members)
            })
            .await
    }

    /// Every group with its members, ascending by group id.
    pub async fn list_groups(&self) -> Result<Vec<GroupSummary>> {
        self.repository
            .atomically(|tx| {
                let groups = tx.groups()?;
                let mut members = members_by_group(tx.memberships()?);
                Ok(groups
                    .into_iter()
                    .map(|group| GroupSummary {
                        members: members.remove(&group.id).unwrap_or_default(),
                        group,
                    })
                    .collect())
            })
            .await
    }

    /// Replace the name and description of a group.
    pub async fn rename_group(&self, group: GroupId, details: NewGroup) -> Result<Group> {
        let updated = self
            .repository
            .atomically(move |tx| {
                if !tx.update_group(group, &details)? {
                    return Err(Error::group_not_found(group));
                }
                tx.group(group)?.ok_or_else(|| Error::group_not_found(group))
            })
            .await?;

        debug!(%group, name = ?updated.name, "Renamed alternative group");
        Ok(updated)
    }

    /// Product-deletion path: disconnect first, then delete the record.
    ///
    /// Returns whether the catalog removed a record.
    pub async fn remove_product(&self, product: ProductId) -> Result<bool> {
        self.disconnect_product(product).await?;
        let removed = self.catalog.remove(product).await?;
        debug!(%product, removed, "Removed product from catalog");
        Ok(removed)
    }

    /// Restore the group invariants after an interrupted mutation.
    ///
    /// Deletes memberships that reference missing groups, then deletes every
    /// group left with fewer than two members. Never merges or splits.
    pub async fn repair(&self) -> Result<RepairReport> {
        let report = self.repository.atomically(repair_in).await?;

        if report.is_clean() {
            debug!("Group store is consistent");
        } else {
            info!(
                dangling = report.dangling_memberships,
                dissolved = report.groups_dissolved,
                released = report.products_released,
                "Repaired group store"
            );
        }
        Ok(report)
    }

    async fn require_product(&self, product: ProductId) -> Result<()> {
        if self.policy.verify_products && !self.catalog.exists(product).await? {
            return Err(Error::product_not_found(product));
        }
        Ok(())
    }
}

fn connect_in(
    tx: &mut dyn GroupTransaction,
    first: ProductId,
    second: ProductId,
) -> Result<ConnectOutcome> {
    match (tx.group_of(first)?, tx.group_of(second)?) {
        (None, None) => {
            let group = tx.create_group(&NewGroup::default())?;
            tx.add_member(first, group)?;
            tx.add_member(second, group)?;
            Ok(ConnectOutcome::Created { group })
        }
        (Some(group), None) => {
            tx.add_member(second, group)?;
            Ok(ConnectOutcome::Joined {
                group,
                product: second,
            })
        }
        (None, Some(group)) => {
            tx.add_member(first, group)?;
            Ok(ConnectOutcome::Joined {
                group,
                product: first,
            })
        }
        (Some(a), Some(b)) if a == b => Ok(ConnectOutcome::AlreadyConnected { group: a }),
        (Some(group), Some(absorbed)) => {
            let moved = merge_in(tx, group, absorbed)?;
            Ok(ConnectOutcome::Merged {
                group,
                absorbed,
                moved,
            })
        }
    }
}

/// Union of two groups inside a unit of work. The only place groups combine.
fn merge_in(tx: &mut dyn GroupTransaction, into: GroupId, from: GroupId) -> Result<usize> {
    if into == from {
        return Ok(0);
    }
    let moved = tx.move_members(from, into)?;
    tx.delete_group(from)?;
    dissolve_if_undersized(tx, into)?;
    Ok(moved)
}

fn disconnect_in(tx: &mut dyn GroupTransaction, product: ProductId) -> Result<DisconnectOutcome> {
    let Some(group) = tx.remove_member(product)? else {
        return Ok(DisconnectOutcome::NotGrouped);
    };

    match dissolve_if_undersized(tx, group)? {
        Some(released) => Ok(DisconnectOutcome::Dissolved { group, released }),
        None => Ok(DisconnectOutcome::Left {
            group,
            remaining: tx.member_count(group)?,
        }),
    }
}

/// Delete `group` if it has fewer than two members.
///
/// Returns the released members when the group was deleted.
fn dissolve_if_undersized(
    tx: &mut dyn GroupTransaction,
    group: GroupId,
) -> Result<Option<Vec<ProductId>>> {
    if tx.member_count(group)? >= MIN_GROUP_MEMBERS {
        return Ok(None);
    }
    let released = tx.members(group)?;
    tx.delete_group(group)?;
    Ok(Some(released))
}

fn repair_in(tx: &mut dyn GroupTransaction) -> Result<RepairReport> {
    let mut report = RepairReport::default();
    let groups = tx.groups()?;
    let known: std::collections::HashSet<GroupId> = groups.iter().map(|g| g.id).collect();

    for membership in tx.memberships()? {
        if !known.contains(&membership.group_id) {
            tx.remove_member(membership.product_id)?;
            report.dangling_memberships += 1;
        }
    }

    for group in groups {
        if let Some(released) = dissolve_if_undersized(tx, group.id)? {
            report.groups_dissolved += 1;
            report.products_released += released.len();
        }
    }

    Ok(report)
}
