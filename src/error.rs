use thiserror::Error;

use crate::asset::AssetId;
use crate::store::StoreError;

/// Canonical failure kinds of the contract operations.
///
/// Every failure aborts the invocation immediately; no operation retries or
/// writes partial state.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The claimed role is not in the operation's required set.
    #[error("access denied: {operation} requires one of {required:?}, got role {role:?}")]
    AccessDenied {
        operation: &'static str,
        required: &'static [&'static str],
        role: String,
    },

    /// Create attempted with a quantity that has no JSON number
    /// representation; accepting it would leave an unreadable record.
    #[error("quantity {0} is not a finite number")]
    InvalidQuantity(f64),

    /// Create attempted on an id that already holds a live record.
    #[error("asset {0} already exists")]
    AlreadyExists(AssetId),

    /// An operation requiring liveness hit an absent id.
    #[error("asset {0} does not exist")]
    NotFound(AssetId),

    /// Stored bytes for the id do not decode to the expected record shape.
    #[error("stored record for asset {id} is corrupt: {reason}")]
    Corrupt { id: AssetId, reason: String },

    /// Underlying store primitive failure, surfaced verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),
}
