//! Grouping operator implementation.

use async_trait::async_trait;

use crate::application::grouping::engine::{ConnectOutcome, DisconnectOutcome, RepairReport};
use crate::application::grouping::migrator::MigrationOutcome;
use crate::domain::alternatives::AlternativesMap;
use crate::domain::cluster::ClusterEntry;
use crate::domain::group::{Group, GroupSummary, NewGroup};
use crate::domain::id::{GroupId, ProductId};
use crate::error::Result;
use crate::port::inbound::operator::grouping::{GroupingOperator, Session};

use super::{entry::Operator, shared};

#[async_trait]
impl GroupingOperator for Operator {
    async fn connect(
        &self,
        session: &Session,
        first: ProductId,
        second: ProductId,
    ) -> Result<ConnectOutcome> {
        let services = shared::start_services(session).await?;
        services.mirror.connect_products(first, second).await
    }

    async fn disconnect(&self, session: &Session, product: ProductId) -> Result<DisconnectOutcome> {
        let services = shared::start_services(session).await?;
        services.mirror.disconnect_product(product).await
    }

    async fn merge(&self, session: &Session, into: GroupId, from: GroupId) -> Result<usize> {
        let services = shared::start_services(session).await?;
        services.mirror.merge_groups(into, from).await
    }

    async fn remove_product(&self, session: &Session, product: ProductId) -> Result<bool> {
        let services = shared::start_services(session).await?;
        services.mirror.remove_product(product).await
    }

    async fn product_group(
        &self,
        session: &Session,
        product: ProductId,
    ) -> Result<Option<GroupId>> {
        let services = shared::start_services(session).await?;
        services.engine().get_product_group(product).await
    }

    async fn alternatives(&self, session: &Session, product: ProductId) -> Result<Vec<ProductId>> {
        let services = shared::start_services(session).await?;
        services.engine().get_alternatives(product).await
    }

    async fn groups(&self, session: &Session) -> Result<Vec<GroupSummary>> {
        let services = shared::start_services(session).await?;
        services.engine().list_groups().await
    }

    async fn rename_group(
        &self,
        session: &Session,
        group: GroupId,
        details: NewGroup,
    ) -> Result<Group> {
        let services = shared::start_services(session).await?;
        services.engine().rename_group(group, details).await
    }

    async fn alternatives_map(&self, session: &Session) -> Result<AlternativesMap> {
        let services = shared::start_services(session).await?;
        services.engine().get_all_alternatives_map().await
    }

    async fn clusters(
        &self,
        session: &Session,
        products: Vec<ProductId>,
    ) -> Result<Vec<ClusterEntry<ProductId>>> {
        let services = shared::start_services(session).await?;
        services.engine().cluster_view(products).await
    }

    async fn migrate(&self, session: &Session) -> Result<MigrationOutcome> {
        let services = shared::open_services(session)?;
        services.migrator.run().await
    }

    async fn repair(&self, session: &Session) -> Result<RepairReport> {
        let services = shared::start_services(session).await?;
        services.engine().repair().await
    }
}
