//! Chain ID to contract address registry.
//!
//! The process-wide SNT registry is built once from
//! [`SNT_DEPLOYMENTS`](crate::SNT_DEPLOYMENTS) on first access and never
//! mutated afterwards, so lookups from any number of threads need no
//! coordination.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use alloy_primitives::Address;

use crate::chain::{ChainId, ContractDeployment};
use crate::error::{ChainNotSupported, RegistryError};
use crate::networks::SNT_DEPLOYMENTS;

static SNT_REGISTRY: LazyLock<ContractRegistry> = LazyLock::new(|| {
    ContractRegistry::from_deployments(SNT_DEPLOYMENTS)
        .expect("built-in SNT deployment table is invalid")
});

/// Immutable mapping from chain ID to a contract's deployed address.
///
/// Every key maps to exactly one non-zero address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRegistry(HashMap<ChainId, Address>);

impl ContractRegistry {
    /// Builds a registry from a deployment table, rejecting zero addresses
    /// and repeated chain IDs.
    pub(crate) fn from_deployments(
        deployments: &[ContractDeployment],
    ) -> Result<Self, RegistryError> {
        let mut map = HashMap::with_capacity(deployments.len());
        for deployment in deployments {
            if deployment.address.is_zero() {
                return Err(RegistryError::ZeroAddress(deployment.chain_id));
            }
            match map.entry(deployment.chain_id) {
                Entry::Occupied(existing) => {
                    return Err(RegistryError::DuplicateChain {
                        chain_id: deployment.chain_id,
                        first: *existing.get(),
                        second: deployment.address,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(deployment.address);
                }
            }
        }
        #[cfg(feature = "telemetry")]
        tracing::debug!(chains = map.len(), "Built contract registry");
        Ok(Self(map))
    }

    /// Returns the contract address deployed on `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainNotSupported`] if no address is registered for the chain.
    pub fn address(&self, chain_id: ChainId) -> Result<Address, ChainNotSupported> {
        self.get(chain_id).ok_or_else(|| {
            #[cfg(feature = "telemetry")]
            tracing::debug!(chain_id, "No contract address registered for chain");
            ChainNotSupported::new(chain_id)
        })
    }

    /// Returns the contract address deployed on `chain_id`, if any.
    #[must_use]
    pub fn get(&self, chain_id: ChainId) -> Option<Address> {
        self.0.get(&chain_id).copied()
    }

    /// Returns `true` if an address is registered for `chain_id`.
    #[must_use]
    pub fn is_supported(&self, chain_id: ChainId) -> bool {
        self.0.contains_key(&chain_id)
    }

    /// Returns the registered chain IDs in ascending order.
    #[must_use]
    pub fn supported_chains(&self) -> Vec<ChainId> {
        let mut chains: Vec<_> = self.0.keys().copied().collect();
        chains.sort_unstable();
        chains
    }

    /// Returns every registered deployment, ordered by chain ID.
    #[must_use]
    pub fn deployments(&self) -> Vec<ContractDeployment> {
        let mut deployments: Vec<_> = self
            .0
            .iter()
            .map(|(chain_id, address)| ContractDeployment::new(*chain_id, *address))
            .collect();
        deployments.sort_unstable_by_key(|d| d.chain_id);
        deployments
    }

    /// Returns the number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no chains are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Returns the process-wide SNT registry.
#[must_use]
pub fn snt_registry() -> &'static ContractRegistry {
    &SNT_REGISTRY
}

/// Returns the SNT contract address deployed on `chain_id`.
///
/// ```
/// use snt_registry::{SNT_MAINNET, contract_address};
///
/// assert_eq!(contract_address(1), Ok(SNT_MAINNET));
/// assert!(contract_address(42).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ChainNotSupported`] if SNT is not deployed on the chain.
pub fn contract_address(chain_id: ChainId) -> Result<Address, ChainNotSupported> {
    SNT_REGISTRY.address(chain_id)
}

/// Returns `true` if SNT is deployed on `chain_id`.
#[must_use]
pub fn is_supported(chain_id: ChainId) -> bool {
    SNT_REGISTRY.is_supported(chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::{ETHEREUM_MAINNET, ETHEREUM_ROPSTEN, SNT_MAINNET, SNT_ROPSTEN};
    use alloy_primitives::address;

    #[test]
    fn test_contract_address_mainnet() {
        assert_eq!(
            contract_address(1),
            Ok(address!("744d70fdbe2ba4cf95131626614a1763df805b9e"))
        );
    }

    #[test]
    fn test_contract_address_ropsten() {
        assert_eq!(
            contract_address(3),
            Ok(address!("c55cf4b03948d7ebc8b9e8bad92643703811d162"))
        );
    }

    #[test]
    fn test_contract_address_unsupported_chain() {
        assert_eq!(contract_address(42), Err(ChainNotSupported::new(42)));
        assert_eq!(contract_address(0), Err(ChainNotSupported::new(0)));
        assert_eq!(
            contract_address(u64::MAX),
            Err(ChainNotSupported::new(u64::MAX))
        );
    }

    #[test]
    fn test_contract_address_is_idempotent() {
        for chain_id in [0, 1, 3, 42] {
            assert_eq!(contract_address(chain_id), contract_address(chain_id));
        }
    }

    #[test]
    fn test_registered_addresses_are_non_zero() {
        for deployment in snt_registry().deployments() {
            assert!(!deployment.address.is_zero());
        }
    }

    #[test]
    fn test_supported_chains() {
        let registry = snt_registry();
        assert_eq!(
            registry.supported_chains(),
            vec![ETHEREUM_MAINNET, ETHEREUM_ROPSTEN]
        );
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(is_supported(1));
        assert!(is_supported(3));
        assert!(!is_supported(42));
    }

    #[test]
    fn test_deployments_match_table() {
        assert_eq!(snt_registry().deployments(), SNT_DEPLOYMENTS.to_vec());
        assert_eq!(snt_registry().get(ETHEREUM_MAINNET), Some(SNT_MAINNET));
        assert_eq!(snt_registry().get(ETHEREUM_ROPSTEN), Some(SNT_ROPSTEN));
        assert!(snt_registry().get(42).is_none());
    }

    #[test]
    fn test_concurrent_lookups() {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        (0..1_000)
                            .map(|i| contract_address(i % 5))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            let expected: Vec<_> = (0..1_000).map(|i| contract_address(i % 5)).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_from_deployments_rejects_zero_address() {
        let result = ContractRegistry::from_deployments(&[
            ContractDeployment::new(1, SNT_MAINNET),
            ContractDeployment::new(5, Address::ZERO),
        ]);
        assert_eq!(result, Err(RegistryError::ZeroAddress(5)));
    }

    #[test]
    fn test_from_deployments_rejects_duplicate_chain() {
        let result = ContractRegistry::from_deployments(&[
            ContractDeployment::new(1, SNT_MAINNET),
            ContractDeployment::new(1, SNT_ROPSTEN),
        ]);
        assert_eq!(
            result,
            Err(RegistryError::DuplicateChain {
                chain_id: 1,
                first: SNT_MAINNET,
                second: SNT_ROPSTEN,
            })
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = ContractRegistry::from_deployments(&[]).unwrap();
        assert!(registry.is_empty());
        assert!(registry.supported_chains().is_empty());
        assert_eq!(registry.address(1), Err(ChainNotSupported::new(1)));
    }
}
