//! Unified operator capability surface for inbound adapters.

use super::configuration::ConfigurationOperator;
use super::grouping::GroupingOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + GroupingOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + GroupingOperator {}
