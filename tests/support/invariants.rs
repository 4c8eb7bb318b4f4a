use std::collections::{BTreeSet, HashSet};

use alternates::application::grouping::engine::GroupingEngine;
use alternates::domain::id::ProductId;
use alternates::port::outbound::catalog::ProductCatalog;
use alternates::port::outbound::store::GroupRepository;

/// The current grouping as a set of member sets.
pub async fn partition<R, C>(engine: &GroupingEngine<R, C>) -> BTreeSet<BTreeSet<ProductId>>
where
    R: GroupRepository,
    C: ProductCatalog,
{
    engine
        .list_groups()
        .await
        .expect("list groups")
        .into_iter()
        .map(|summary| summary.members.into_iter().collect())
        .collect()
}

/// Assert the structural invariants of the group store.
///
/// Every group has at least two members, no product is in two groups, and
/// every membership row points at an existing group.
pub async fn assert_group_invariants<R, C>(engine: &GroupingEngine<R, C>, context: &str)
where
    R: GroupRepository,
    C: ProductCatalog,
{
    let groups = engine.list_groups().await.expect("list groups");
    let memberships = engine
        .repository()
        .atomically(|tx| tx.memberships())
        .await
        .expect("load memberships");

    let mut seen = HashSet::new();
    for summary in &groups {
        assert!(
            summary.members.len() >= 2,
            "{context}: group {} has {} member(s)",
            summary.group.id,
            summary.members.len()
        );
        for member in &summary.members {
            assert!(
                seen.insert(*member),
                "{context}: product {member} appears in more than one group"
            );
        }
    }

    let group_ids: HashSet<_> = groups.iter().map(|summary| summary.group.id).collect();
    for membership in &memberships {
        assert!(
            group_ids.contains(&membership.group_id),
            "{context}: product {} points at missing group {}",
            membership.product_id,
            membership.group_id
        );
    }
    assert_eq!(seen.len(), memberships.len(), "{context}: membership count");
}
