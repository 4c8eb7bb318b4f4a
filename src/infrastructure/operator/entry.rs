//! Operator entry point installed by the binary.

use crate::port::inbound::operator::port::OperatorPort;

/// Infrastructure-backed implementation of every operator capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Boxed form expected by `cli::operator::install`.
    #[must_use]
    pub fn boxed() -> Box<dyn OperatorPort> {
        Box::new(Self::new())
    }
}
