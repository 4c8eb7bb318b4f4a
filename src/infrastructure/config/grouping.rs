//! Grouping engine configuration.

use serde::Deserialize;

use crate::application::grouping::engine::GroupingPolicy;

/// Feature switches for the grouping engine and its startup.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupingConfig {
    /// Reject connect/disconnect of products the catalog does not know.
    #[serde(default)]
    pub verify_products: bool,

    /// Rebuild groups from the legacy link table before serving.
    #[serde(default = "default_true")]
    pub migrate_on_startup: bool,

    /// Keep writing the legacy link table alongside the group store.
    #[serde(default = "default_true")]
    pub mirror_legacy_links: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            verify_products: false,
            migrate_on_startup: true,
            mirror_legacy_links: true,
        }
    }
}

impl GroupingConfig {
    /// Engine policy derived from these settings.
    #[must_use]
    pub fn policy(&self) -> GroupingPolicy {
        GroupingPolicy {
            verify_products: self.verify_products,
        }
    }
}
