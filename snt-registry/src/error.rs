//! Error types for SNT contract lookups.

use alloy_primitives::Address;

use crate::chain::ChainId;

/// The requested chain has no registered SNT deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not available for chain id {chain_id}")]
pub struct ChainNotSupported {
    /// The chain ID that was looked up.
    pub chain_id: ChainId,
}

impl ChainNotSupported {
    /// Creates a new chain-not-supported error.
    #[must_use]
    pub const fn new(chain_id: ChainId) -> Self {
        Self { chain_id }
    }
}

/// Errors raised while building a registry from a deployment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RegistryError {
    /// A deployment carries the zero address.
    #[error("zero address registered for chain id {0}")]
    ZeroAddress(ChainId),
    /// Two deployments share a chain ID.
    #[error("chain id {chain_id} registered twice ({first} and {second})")]
    DuplicateChain {
        chain_id: ChainId,
        first: Address,
        second: Address,
    },
}
