#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! SNT contract address lookup by EIP-155 chain ID.
//!
//! This crate holds the deployed addresses of the Status Network Token (SNT)
//! contract on every supported EVM chain, and resolves a chain ID to its
//! address. The table is fixed at compile time; chains outside it are
//! reported as [`ChainNotSupported`].
//!
//! # Example
//!
//! ```
//! use snt_registry::{ChainNotSupported, contract_address};
//!
//! let snt = contract_address(1)?;
//! assert_eq!(snt.to_string(), "0x744d70FDBE2Ba4CF95131626614a1763DF805B9E");
//!
//! assert_eq!(contract_address(42), Err(ChainNotSupported::new(42)));
//! # Ok::<(), ChainNotSupported>(())
//! ```
//!
//! # Modules
//!
//! - [`chain`] - Chain ID alias, CAIP-2 helpers and deployment records
//! - [`error`] - Lookup error types
//! - [`registry`] - The immutable chain ID to address registry
//!
//! Well-known chain IDs, addresses and the [`SNT`] accessor are re-exported at
//! the crate root.
//!
//! # Feature Flags
//!
//! - `telemetry` - Emits `tracing` events for registry construction and lookup misses

pub mod chain;
pub mod error;
pub mod registry;

mod networks;
pub use networks::*;

pub use chain::{ChainId, ContractDeployment, NetworkInfo, caip2, parse_caip2};
pub use error::ChainNotSupported;
pub use registry::{ContractRegistry, contract_address, is_supported, snt_registry};
