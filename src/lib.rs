//! Food supply-chain asset lifecycle contract.
//!
//! The contract records traceable food assets as gated state mutations over
//! an abstract key-value store supplied by the surrounding ledger substrate.
//! Consensus, ordering, identity issuance, and transport all live outside;
//! this crate only consumes a [`store::StateStore`] and the caller identity
//! carried by a [`contract::TxContext`].

pub mod access;
pub mod asset;
pub mod contract;
pub mod dispatch;
pub mod error;
pub mod repo;
pub mod store;

pub use asset::{AssetId, AssetRecord, INITIAL_STAGE};
pub use contract::TxContext;
pub use error::ContractError;
pub use store::{MemoryStore, StateStore, StoreError};
