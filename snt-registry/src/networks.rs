//! Known EVM networks and SNT token deployments.

use alloy_primitives::{Address, address};

use crate::chain::{ChainId, ContractDeployment, NetworkInfo};

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET: ChainId = 1;

/// Ethereum Ropsten (testnet) chain ID.
pub const ETHEREUM_ROPSTEN: ChainId = 3;

/// SNT contract address on Ethereum Mainnet.
pub const SNT_MAINNET: Address = address!("744d70fdbe2ba4cf95131626614a1763df805b9e");

/// SNT (STT) contract address on Ropsten.
pub const SNT_ROPSTEN: Address = address!("c55cf4b03948d7ebc8b9e8bad92643703811d162");

/// Well-known networks with their names and chain IDs.
pub static KNOWN_NETWORKS: &[NetworkInfo] = &[
    NetworkInfo {
        name: "mainnet",
        chain_id: ETHEREUM_MAINNET,
    },
    NetworkInfo {
        name: "ropsten",
        chain_id: ETHEREUM_ROPSTEN,
    },
];

/// Well-known SNT deployments.
///
/// Use [`SNT::on`] for per-chain lookups, or [`crate::snt_registry`] for the
/// indexed registry built from this table.
pub static SNT_DEPLOYMENTS: &[ContractDeployment] = &[
    ContractDeployment::new(ETHEREUM_MAINNET, SNT_MAINNET),
    ContractDeployment::new(ETHEREUM_ROPSTEN, SNT_ROPSTEN),
];

/// Looks up a human-readable network name by chain ID.
#[must_use]
pub fn network_name(chain_id: ChainId) -> Option<&'static str> {
    KNOWN_NETWORKS
        .iter()
        .find(|n| n.chain_id == chain_id)
        .map(|n| n.name)
}

/// Looks up a chain ID by its human-readable network name.
#[must_use]
pub fn chain_id_by_network_name(name: &str) -> Option<ChainId> {
    KNOWN_NETWORKS
        .iter()
        .find(|n| n.name == name)
        .map(|n| n.chain_id)
}

/// Ergonomic accessors for SNT deployments on well-known chains.
///
/// ```
/// use snt_registry::{ETHEREUM_MAINNET, SNT};
///
/// let snt = SNT::on(ETHEREUM_MAINNET).unwrap();
/// assert_eq!(snt.address, SNT::mainnet().address);
/// ```
#[derive(Debug, Clone, Copy)]
#[allow(clippy::upper_case_acronyms)]
pub struct SNT;

#[allow(clippy::missing_panics_doc)]
impl SNT {
    /// Looks up an SNT deployment by chain ID.
    ///
    /// Returns `None` if the chain is not in the built-in deployment table.
    #[must_use]
    pub fn on(chain_id: ChainId) -> Option<&'static ContractDeployment> {
        SNT_DEPLOYMENTS.iter().find(|d| d.chain_id == chain_id)
    }

    /// Returns all known SNT deployments.
    #[must_use]
    pub fn all() -> &'static [ContractDeployment] {
        SNT_DEPLOYMENTS
    }

    /// SNT on Ethereum Mainnet (eip155:1).
    #[must_use]
    pub fn mainnet() -> &'static ContractDeployment {
        Self::on(ETHEREUM_MAINNET).expect("built-in SNT deployment for mainnet missing")
    }

    /// SNT on Ropsten (eip155:3).
    #[must_use]
    pub fn ropsten() -> &'static ContractDeployment {
        Self::on(ETHEREUM_ROPSTEN).expect("built-in SNT deployment for ropsten missing")
    }
}
