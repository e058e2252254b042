//! Asset repository: typed read/write/existence primitives over the state
//! store, keyed by asset id.

use tracing::debug;

use crate::asset::{AssetRecord, SCHEMA_VERSION};
use crate::error::ContractError;
use crate::store::StateStore;

pub fn exists<S: StateStore>(store: &S, id: &str) -> Result<bool, ContractError> {
    Ok(store.get(id)?.is_some())
}

pub fn read<S: StateStore>(store: &S, id: &str) -> Result<AssetRecord, ContractError> {
    let bytes = store
        .get(id)?
        .ok_or_else(|| ContractError::NotFound(id.to_string()))?;
    decode(id, &bytes)
}

pub fn write<S: StateStore>(store: &mut S, record: &AssetRecord) -> Result<(), ContractError> {
    let bytes = serde_json::to_vec(record).expect("asset record encode");
    debug!(id = %record.asset_id, stage = %record.current_stage, "writing asset record");
    store.put(&record.asset_id, bytes)?;
    Ok(())
}

pub fn delete<S: StateStore>(store: &mut S, id: &str) -> Result<(), ContractError> {
    debug!(id, "deleting asset record");
    store.delete(id)?;
    Ok(())
}

fn decode(id: &str, bytes: &[u8]) -> Result<AssetRecord, ContractError> {
    let record: AssetRecord =
        serde_json::from_slice(bytes).map_err(|err| ContractError::Corrupt {
            id: id.to_string(),
            reason: err.to_string(),
        })?;
    if record.schema != SCHEMA_VERSION {
        return Err(ContractError::Corrupt {
            id: id.to_string(),
            reason: format!(
                "unsupported schema version {} (expected {})",
                record.schema, SCHEMA_VERSION
            ),
        });
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    /// Store whose every primitive fails, for surfacing StoreIO paths.
    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Err(StoreError::Read {
                key: key.to_string(),
                reason: "backend offline".into(),
            })
        }

        fn put(&mut self, key: &str, _value: Vec<u8>) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "backend offline".into(),
            })
        }

        fn delete(&mut self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::Delete {
                key: key.to_string(),
                reason: "backend offline".into(),
            })
        }
    }

    #[test]
    fn write_then_read_returns_the_same_record() {
        let mut store = MemoryStore::new();
        let record = AssetRecord::new("lot-9", "tomatoes", 80.0, "kg", "Sicilia", "farm-1");
        write(&mut store, &record).unwrap();
        assert!(exists(&store, "lot-9").unwrap());
        assert_eq!(read(&store, "lot-9").unwrap(), record);
    }

    #[test]
    fn reading_an_absent_id_is_not_found() {
        let store = MemoryStore::new();
        assert!(!exists(&store, "lot-9").unwrap());
        match read(&store, "lot-9").unwrap_err() {
            ContractError::NotFound(id) => assert_eq!(id, "lot-9"),
            _ => panic!("unexpected error"),
        }
    }

    #[test]
    fn undecodable_bytes_are_corrupt() {
        let mut store = MemoryStore::new();
        store.put("lot-9", b"not json".to_vec()).unwrap();
        match read(&store, "lot-9").unwrap_err() {
            ContractError::Corrupt { id, .. } => assert_eq!(id, "lot-9"),
            _ => panic!("unexpected error"),
        }
    }

    #[test]
    fn unsupported_schema_version_is_corrupt() {
        let mut store = MemoryStore::new();
        let mut record = AssetRecord::new("lot-9", "tomatoes", 80.0, "kg", "Sicilia", "farm-1");
        record.schema = 99;
        store
            .put("lot-9", serde_json::to_vec(&record).unwrap())
            .unwrap();
        match read(&store, "lot-9").unwrap_err() {
            ContractError::Corrupt { reason, .. } => {
                assert!(reason.contains("schema version 99"))
            }
            _ => panic!("unexpected error"),
        }
    }

    #[test]
    fn missing_fields_are_corrupt() {
        let mut store = MemoryStore::new();
        store
            .put("lot-9", br#"{"schema":1,"asset_id":"lot-9"}"#.to_vec())
            .unwrap();
        assert!(matches!(
            read(&store, "lot-9").unwrap_err(),
            ContractError::Corrupt { .. }
        ));
    }

    #[test]
    fn store_failures_surface_verbatim() {
        let mut store = BrokenStore;
        assert!(matches!(
            exists(&store, "lot-9").unwrap_err(),
            ContractError::Store(StoreError::Read { .. })
        ));
        let record = AssetRecord::new("lot-9", "tomatoes", 80.0, "kg", "Sicilia", "farm-1");
        assert!(matches!(
            write(&mut store, &record).unwrap_err(),
            ContractError::Store(StoreError::Write { .. })
        ));
        assert!(matches!(
            delete(&mut store, "lot-9").unwrap_err(),
            ContractError::Store(StoreError::Delete { .. })
        ));
    }
}
