use std::collections::BTreeMap;

use thiserror::Error;

/// Failure of an underlying state-store primitive.
///
/// The contract treats these as non-recoverable and surfaces them verbatim;
/// retry policy belongs to the substrate, not this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not service a read for the given key.
    #[error("state store read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    /// The store could not service a write for the given key.
    #[error("state store write failed for key {key}: {reason}")]
    Write { key: String, reason: String },

    /// The store could not service a delete for the given key.
    #[error("state store delete failed for key {key}: {reason}")]
    Delete { key: String, reason: String },
}

/// Key-value state scoped to the current transaction.
///
/// Implemented by the ledger substrate; the contract never assumes anything
/// beyond these three primitives. Visibility and write arbitration between
/// concurrent transactions are the substrate's problem.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store backing tests and local simulation.
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
