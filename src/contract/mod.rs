//! Lifecycle operations of the asset contract.
//!
//! Each operation runs inside one substrate transaction: check access,
//! validate liveness, then exactly one terminal write or delete. An abort
//! before the terminal call leaves nothing half-updated.

use tracing::info;

use crate::access::{self, Operation};
use crate::asset::AssetRecord;
use crate::error::ContractError;
use crate::repo;
use crate::store::StateStore;

/// Transaction-scoped view handed to every invocation: the store as the
/// substrate exposes it for this transaction, plus the substrate-verified
/// identity of the invoking party.
pub struct TxContext<'a, S: StateStore> {
    store: &'a mut S,
    caller: String,
}

impl<'a, S: StateStore> TxContext<'a, S> {
    pub fn new(store: &'a mut S, caller: impl Into<String>) -> Self {
        Self {
            store,
            caller: caller.into(),
        }
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }

    /// Registers a new asset. Producer only; the id must be absent.
    pub fn create_asset(
        &mut self,
        id: &str,
        product_type: &str,
        quantity: f64,
        unit: &str,
        origin: &str,
        role: &str,
    ) -> Result<(), ContractError> {
        access::require_role(Operation::Create, role)?;
        // NaN/infinity would encode as JSON null and poison every later read.
        if !quantity.is_finite() {
            return Err(ContractError::InvalidQuantity(quantity));
        }
        if repo::exists(&*self.store, id)? {
            return Err(ContractError::AlreadyExists(id.to_string()));
        }
        let record = AssetRecord::new(id, product_type, quantity, unit, origin, &*self.caller);
        repo::write(&mut *self.store, &record)?;
        info!(id, owner = %self.caller, "asset created");
        Ok(())
    }

    /// Returns the current record unchanged. Unrestricted.
    pub fn read_asset(&self, id: &str) -> Result<AssetRecord, ContractError> {
        repo::read(&*self.store, id)
    }

    /// Liveness check. Unrestricted.
    pub fn asset_exists(&self, id: &str) -> Result<bool, ContractError> {
        repo::exists(&*self.store, id)
    }

    /// Moves a live asset to a new stage and records the caller as owner.
    /// Producer or logistics. The stage is an opaque string: no vocabulary
    /// check, and re-setting the current value is an accepted no-op mutation.
    pub fn update_stage(
        &mut self,
        id: &str,
        new_stage: &str,
        role: &str,
    ) -> Result<(), ContractError> {
        access::require_role(Operation::UpdateStage, role)?;
        let mut record = repo::read(&*self.store, id)?;
        record.current_stage = new_stage.to_string();
        record.owner = self.caller.clone();
        repo::write(&mut *self.store, &record)?;
        info!(id, stage = new_stage, owner = %self.caller, "asset re-staged");
        Ok(())
    }

    /// Removes a live asset from the store. Producer only.
    pub fn delete_asset(&mut self, id: &str, role: &str) -> Result<(), ContractError> {
        access::require_role(Operation::Delete, role)?;
        if !repo::exists(&*self.store, id)? {
            return Err(ContractError::NotFound(id.to_string()));
        }
        repo::delete(&mut *self.store, id)?;
        info!(id, caller = %self.caller, "asset deleted");
        Ok(())
    }
}
