//! Handlers for the grouping commands.

use crate::adapter::inbound::cli::command::{
    ClustersArgs, ConnectArgs, MergeArgs, ProductArg, RenameArgs,
};
use crate::adapter::inbound::cli::{operator, output};
use crate::application::grouping::engine::{ConnectOutcome, DisconnectOutcome};
use crate::application::grouping::migrator::MigrationOutcome;
use crate::domain::cluster::ClusterEntry;
use crate::domain::group::NewGroup;
use crate::domain::id::{GroupId, ProductId};
use crate::error::Result;
use crate::port::inbound::operator::grouping::Session;

/// Execute `connect`.
pub async fn execute_connect(session: &Session, args: &ConnectArgs) -> Result<()> {
    let (first, second) = (ProductId::new(args.first), ProductId::new(args.second));
    let outcome = operator::operator()
        .connect(session, first, second)
        .await?;

    if output::result("connect", &outcome) {
        return Ok(());
    }

    match outcome {
        ConnectOutcome::Created { group } => {
            output::success(&format!(
                "Created group {} with {first} and {second}",
                output::highlight(group)
            ));
        }
        ConnectOutcome::Joined { group, product } => {
            output::success(&format!(
                "Product {product} joined group {}",
                output::highlight(group)
            ));
        }
        ConnectOutcome::AlreadyConnected { group } => {
            output::note(&format!("Already alternatives in group {group}"));
        }
        ConnectOutcome::Merged {
            group,
            absorbed,
            moved,
        } => {
            output::success(&format!(
                "Merged group {absorbed} into {} ({moved} moved)",
                output::highlight(group)
            ));
        }
    }
    Ok(())
}

/// Execute `disconnect`.
pub async fn execute_disconnect(session: &Session, args: &ProductArg) -> Result<()> {
    let product = ProductId::new(args.product);
    let outcome = operator::operator().disconnect(session, product).await?;

    if output::result("disconnect", &outcome) {
        return Ok(());
    }

    match outcome {
        DisconnectOutcome::NotGrouped => {
            output::note(&format!("Product {product} has no alternatives"));
        }
        DisconnectOutcome::Left { group, remaining } => {
            output::success(&format!(
                "Product {product} left group {} ({remaining} remain)",
                output::highlight(group)
            ));
        }
        DisconnectOutcome::Dissolved { group, released } => {
            output::success(&format!(
                "Group {} dissolved; released {}",
                output::highlight(group),
                output::id_list(&released)
            ));
        }
    }
    Ok(())
}

/// Execute `merge`.
pub async fn execute_merge(session: &Session, args: &MergeArgs) -> Result<()> {
    let (into, from) = (GroupId::new(args.into), GroupId::new(args.from));
    let moved = operator::operator().merge(session, into, from).await?;

    if output::result("merge", &serde_json::json!({ "group": into, "moved": moved })) {
        return Ok(());
    }

    if into == from {
        output::note("Nothing to merge");
    } else {
        output::success(&format!(
            "Merged group {from} into {} ({moved} moved)",
            output::highlight(into)
        ));
    }
    Ok(())
}

/// Execute `remove-product`.
pub async fn execute_remove_product(session: &Session, args: &ProductArg) -> Result<()> {
    let product = ProductId::new(args.product);
    let removed = operator::operator().remove_product(session, product).await?;

    if output::result(
        "remove_product",
        &serde_json::json!({ "product": product, "removed": removed }),
    ) {
        return Ok(());
    }

    if removed {
        output::success(&format!("Removed product {product}"));
    } else {
        output::note(&format!(
            "Product {product} disconnected; no catalog record to delete"
        ));
    }
    Ok(())
}

/// Execute `group`.
pub async fn execute_group(session: &Session, args: &ProductArg) -> Result<()> {
    let product = ProductId::new(args.product);
    let group = operator::operator().product_group(session, product).await?;

    if output::result(
        "group",
        &serde_json::json!({ "product": product, "group": group }),
    ) {
        return Ok(());
    }

    match group {
        Some(group) => output::field("Group", output::highlight(group)),
        None => output::note(&format!("Product {product} is not grouped")),
    }
    Ok(())
}

/// Execute `alternatives`.
pub async fn execute_alternatives(session: &Session, args: &ProductArg) -> Result<()> {
    let product = ProductId::new(args.product);
    let alternatives = operator::operator().alternatives(session, product).await?;

    if output::result(
        "alternatives",
        &serde_json::json!({ "product": product, "alternatives": alternatives }),
    ) {
        return Ok(());
    }

    if alternatives.is_empty() {
        output::note(&format!("Product {product} has no alternatives"));
    } else {
        output::field("Alternatives", output::id_list(&alternatives));
    }
    Ok(())
}

/// Execute `groups`.
pub async fn execute_groups(session: &Session) -> Result<()> {
    let groups = operator::operator().groups(session).await?;

    if output::result("groups", &groups) {
        return Ok(());
    }

    if groups.is_empty() {
        output::note("No groups");
        output::hint("connect two products with `alternates connect A B`");
        return Ok(());
    }

    let widths = [6, 20, 40];
    output::table_header(&[("Group", widths[0]), ("Name", widths[1]), ("Members", widths[2])]);
    output::table_separator(&widths);
    for summary in &groups {
        output::table_row(
            &[
                summary.group.id.to_string(),
                summary.group.name.clone().unwrap_or_else(|| "-".to_string()),
                output::id_list(&summary.members),
            ],
            &widths,
        );
    }
    Ok(())
}

/// Execute `rename`.
pub async fn execute_rename(session: &Session, args: RenameArgs) -> Result<()> {
    let group = operator::operator()
        .rename_group(
            session,
            GroupId::new(args.group),
            NewGroup {
                name: args.name,
                description: args.description,
            },
        )
        .await?;

    if output::result("rename", &group) {
        return Ok(());
    }

    output::success(&format!("Updated group {}", output::highlight(group.id)));
    output::field("Name", group.name.as_deref().unwrap_or("-"));
    output::field("Description", group.description.as_deref().unwrap_or("-"));
    Ok(())
}

/// Execute `map`.
pub async fn execute_map(session: &Session) -> Result<()> {
    let map = operator::operator().alternatives_map(session).await?;

    if output::result("map", &map) {
        return Ok(());
    }

    if map.is_empty() {
        output::note("No alternatives recorded");
        return Ok(());
    }
    for (product, alternatives) in map.iter() {
        let alternatives: Vec<ProductId> = alternatives.iter().copied().collect();
        output::field(&product.to_string(), output::id_list(&alternatives));
    }
    Ok(())
}

/// Execute `clusters`.
pub async fn execute_clusters(session: &Session, args: &ClustersArgs) -> Result<()> {
    let products = args.products.iter().copied().map(ProductId::new).collect();
    let clusters = operator::operator().clusters(session, products).await?;

    if output::result("clusters", &clusters) {
        return Ok(());
    }

    for entry in &clusters {
        match entry {
            ClusterEntry::Single { item } => output::field("single", item),
            ClusterEntry::Cluster {
                primary,
                alternatives,
            } => output::field(
                "cluster",
                format!(
                    "{} {}",
                    output::highlight(primary),
                    output::muted(format!("+ {}", output::id_list(alternatives)))
                ),
            ),
        }
    }
    Ok(())
}

/// Execute `migrate`.
pub async fn execute_migrate(session: &Session) -> Result<()> {
    let outcome = operator::operator().migrate(session).await?;

    if output::result("migrate", &outcome) {
        return Ok(());
    }

    match outcome {
        MigrationOutcome::Migrated(report) => {
            output::section("Legacy Migration");
            output::success("Rebuilt groups from legacy links");
            output::field("Links read", report.links_consumed);
            output::field("Edges", report.distinct_edges);
            output::field("Groups", report.groups_created);
            output::field("Products", report.products_grouped);
            if report.skipped_components > 0 {
                output::warning(&format!(
                    "{} self-referencing links skipped",
                    report.skipped_components
                ));
            }
        }
        MigrationOutcome::AlreadyMigrated => {
            output::note("Groups already exist; legacy links were not read");
        }
    }
    Ok(())
}

/// Execute `repair`.
pub async fn execute_repair(session: &Session) -> Result<()> {
    let report = operator::operator().repair(session).await?;

    if output::result("repair", &report) {
        return Ok(());
    }

    if report.is_clean() {
        output::success("Group store is consistent");
        return Ok(());
    }
    output::section("Repair");
    output::field("Dangling", report.dangling_memberships);
    output::field("Dissolved", report.groups_dissolved);
    output::field("Released", report.products_released);
    Ok(())
}
