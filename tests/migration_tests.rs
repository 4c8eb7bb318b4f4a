//! Legacy link migration: component grouping and the run-once guard.

mod harness;
mod support;

use std::collections::BTreeSet;
use std::sync::Arc;

use alternates::adapter::outbound::memory::legacy::MemoryLegacyLinkStore;
use alternates::adapter::outbound::memory::store::MemoryGroupRepository;
use alternates::application::grouping::engine::{DisconnectOutcome, GroupingEngine};
use alternates::application::grouping::migrator::{LegacyMigrator, MigrationOutcome};
use alternates::domain::id::ProductId;
use alternates::domain::link::LegacyLink;
use alternates::infrastructure::bootstrap;
use alternates::infrastructure::config::settings::Config;
use alternates::port::outbound::legacy::LegacyLinkStore;
use alternates::port::outbound::store::GroupRepository;

use harness::temp_db::TempDb;
use support::invariants::{assert_group_invariants, partition};
use support::model::PartitionModel;
use support::ops::random_edges;

fn p(id: i64) -> ProductId {
    ProductId::new(id)
}

fn set(ids: &[i64]) -> BTreeSet<ProductId> {
    ids.iter().copied().map(p).collect()
}

fn link(a: i64, b: i64) -> LegacyLink {
    LegacyLink::new(p(a), p(b))
}

async fn seed_links<L: LegacyLinkStore>(links: &L, pairs: &[(i64, i64)]) {
    for &(a, b) in pairs {
        links.link(p(a), p(b)).await.expect("seed legacy link");
    }
}

async fn components_become_groups<R, L>(repository: Arc<R>, links: Arc<L>)
where
    R: GroupRepository,
    L: LegacyLinkStore,
{
    seed_links(links.as_ref(), &[(1, 2), (2, 3), (4, 5)]).await;
    let migrator = LegacyMigrator::new(Arc::clone(&repository), Arc::clone(&links));

    let outcome = migrator.run().await.unwrap();

    let MigrationOutcome::Migrated(report) = outcome else {
        panic!("expected a migration, got {outcome:?}");
    };
    assert_eq!(report.groups_created, 2);
    assert_eq!(report.products_grouped, 5);
    assert_eq!(report.links_consumed, 6);
    assert_eq!(report.distinct_edges, 3);

    let engine = GroupingEngine::new(repository);
    assert_eq!(
        partition(&engine).await,
        BTreeSet::from([set(&[1, 2, 3]), set(&[4, 5])])
    );
    assert_group_invariants(&engine, "after migration").await;
    assert_eq!(links.load_all().await.unwrap().len(), 6);
}

async fn second_run_changes_nothing<R, L>(repository: Arc<R>, links: Arc<L>)
where
    R: GroupRepository,
    L: LegacyLinkStore,
{
    seed_links(links.as_ref(), &[(1, 2), (3, 4)]).await;
    let migrator = LegacyMigrator::new(Arc::clone(&repository), Arc::clone(&links));
    assert!(matches!(
        migrator.run().await.unwrap(),
        MigrationOutcome::Migrated(_)
    ));
    let engine = GroupingEngine::new(repository);
    let before = partition(&engine).await;

    seed_links(links.as_ref(), &[(2, 3)]).await;
    assert_eq!(migrator.run().await.unwrap(), MigrationOutcome::AlreadyMigrated);

    assert_eq!(partition(&engine).await, before);
}

#[tokio::test]
async fn memory_components_become_groups() {
    components_become_groups(
        Arc::new(MemoryGroupRepository::new()),
        Arc::new(MemoryLegacyLinkStore::new()),
    )
    .await;
}

#[tokio::test]
async fn sqlite_components_become_groups() {
    let db = TempDb::create();
    components_become_groups(db.repository(), db.links()).await;
}

#[tokio::test]
async fn memory_second_run_changes_nothing() {
    second_run_changes_nothing(
        Arc::new(MemoryGroupRepository::new()),
        Arc::new(MemoryLegacyLinkStore::new()),
    )
    .await;
}

#[tokio::test]
async fn sqlite_second_run_changes_nothing() {
    let db = TempDb::create();
    second_run_changes_nothing(db.repository(), db.links()).await;
}

#[tokio::test]
async fn one_directional_and_self_links_are_tolerated() {
    let repository = Arc::new(MemoryGroupRepository::new());
    let links = Arc::new(MemoryLegacyLinkStore::with_links([
        link(1, 2),
        link(3, 2),
        link(9, 9),
    ]));

    let outcome = LegacyMigrator::new(Arc::clone(&repository), links)
        .run()
        .await
        .unwrap();

    let MigrationOutcome::Migrated(report) = outcome else {
        panic!("expected a migration, got {outcome:?}");
    };
    assert_eq!(report.groups_created, 1);
    let engine = GroupingEngine::new(repository);
    assert_eq!(partition(&engine).await, BTreeSet::from([set(&[1, 2, 3])]));
    assert_eq!(engine.get_product_group(p(9)).await.unwrap(), None);
}

#[tokio::test]
async fn empty_legacy_table_migrates_to_nothing() {
    let db = TempDb::create();
    let outcome = LegacyMigrator::new(db.repository(), db.links())
        .run()
        .await
        .unwrap();

    let MigrationOutcome::Migrated(report) = outcome else {
        panic!("expected a migration, got {outcome:?}");
    };
    assert_eq!(report.groups_created, 0);
    assert!(GroupingEngine::new(db.repository())
        .list_groups()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn random_link_graphs_match_connected_components() {
    for seed in 0..30 {
        let edges = random_edges(seed, 25, 30);
        let links = Arc::new(MemoryLegacyLinkStore::with_links(
            edges.iter().map(|&(a, b)| LegacyLink::new(a, b)),
        ));
        let repository = Arc::new(MemoryGroupRepository::new());
        LegacyMigrator::new(Arc::clone(&repository), links)
            .run()
            .await
            .unwrap();

        let mut model = PartitionModel::default();
        for &(a, b) in &edges {
            model.connect(a, b);
        }

        let engine = GroupingEngine::new(repository);
        let context = format!("seed {seed}");
        assert_group_invariants(&engine, &context).await;
        assert_eq!(partition(&engine).await, model.partition(), "{context}");
    }
}

#[tokio::test]
async fn restart_after_disconnect_keeps_products_apart() {
    let db = TempDb::create();
    seed_links(db.links().as_ref(), &[(1, 2)]).await;
    let config = Config::parse_toml(&format!(
        "database = {:?}\n\n[grouping]\nmirror_legacy_links = false\n",
        db.path().to_string_lossy()
    ))
    .unwrap();

    let services = bootstrap::start(&config).await.unwrap();
    assert!(services.engine().get_product_group(p(1)).await.unwrap().is_some());
    let outcome = services.mirror.disconnect_product(p(1)).await.unwrap();
    assert!(matches!(outcome, DisconnectOutcome::Dissolved { .. }));
    drop(services);

    let restarted = bootstrap::start(&config).await.unwrap();
    assert_eq!(restarted.engine().get_product_group(p(1)).await.unwrap(), None);
    assert_eq!(restarted.engine().get_product_group(p(2)).await.unwrap(), None);
    assert_eq!(
        restarted.migrator.run().await.unwrap(),
        MigrationOutcome::AlreadyMigrated
    );
    assert_eq!(db.links().load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn sqlite_emptied_store_is_not_rebuilt() {
    let db = TempDb::create();
    seed_links(db.links().as_ref(), &[(1, 2), (3, 4)]).await;
    let migrator = LegacyMigrator::new(db.repository(), db.links());
    assert!(matches!(
        migrator.run().await.unwrap(),
        MigrationOutcome::Migrated(_)
    ));

    let engine = GroupingEngine::new(db.repository());
    engine.disconnect_product(p(1)).await.unwrap();
    engine.disconnect_product(p(3)).await.unwrap();
    assert!(engine.list_groups().await.unwrap().is_empty());

    assert_eq!(migrator.run().await.unwrap(), MigrationOutcome::AlreadyMigrated);
    assert!(engine.list_groups().await.unwrap().is_empty());
}
