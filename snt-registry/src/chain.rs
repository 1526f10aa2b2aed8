//! EVM chain primitives.
//!
//! Provides the EIP-155 chain id alias, CAIP-2 helpers and the record types
//! stored in the static deployment tables.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// An EIP-155 chain ID (e.g., 1 for Ethereum mainnet, 3 for Ropsten).
pub type ChainId = u64;

/// Formats a chain ID as a CAIP-2 identifier.
///
/// Example: `caip2(1)` returns `"eip155:1"`.
#[must_use]
pub fn caip2(chain_id: ChainId) -> String {
    format!("eip155:{chain_id}")
}

/// Parses a CAIP-2 identifier into an EIP-155 chain ID.
///
/// Returns `None` if the input is not a valid `eip155:` prefixed string.
#[must_use]
pub fn parse_caip2(caip: &str) -> Option<ChainId> {
    caip.strip_prefix("eip155:").and_then(|s| s.parse().ok())
}

/// A contract deployment on an EVM network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeployment {
    /// EIP-155 chain ID the contract is deployed on.
    pub chain_id: ChainId,
    /// Contract address.
    pub address: Address,
}

impl ContractDeployment {
    /// Creates a new deployment record.
    #[must_use]
    pub const fn new(chain_id: ChainId, address: Address) -> Self {
        Self { chain_id, address }
    }

    /// Returns the CAIP-2 identifier of the deployment's chain.
    #[must_use]
    pub fn network(&self) -> String {
        caip2(self.chain_id)
    }
}

/// A known network definition with its chain ID and human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Human-readable network name (e.g., "mainnet", "ropsten")
    pub name: &'static str,
    /// EIP-155 chain ID
    pub chain_id: ChainId,
}
