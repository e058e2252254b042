//! Positional invocation surface.
//!
//! The substrate invokes the contract by operation name with positional
//! string arguments; this layer maps those onto the typed operations and
//! renders results as JSON.

use serde_json::Value;
use thiserror::Error;

use crate::asset::AssetRecord;
use crate::contract::TxContext;
use crate::error::ContractError;
use crate::store::StateStore;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown operation {0}")]
    UnknownOperation(String),

    #[error("{operation} expects {expected} arguments, got {actual}")]
    BadArity {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid quantity {value:?}: {reason}")]
    InvalidQuantity { value: String, reason: String },

    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// Result of a dispatched invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum InvokeResponse {
    Asset(AssetRecord),
    Exists(bool),
    Done,
}

impl InvokeResponse {
    /// JSON payload handed back to the substrate.
    pub fn into_json(self) -> Value {
        match self {
            InvokeResponse::Asset(record) => {
                serde_json::to_value(record).expect("asset record encode")
            }
            InvokeResponse::Exists(live) => Value::Bool(live),
            InvokeResponse::Done => Value::Null,
        }
    }
}

pub fn invoke<S: StateStore>(
    ctx: &mut TxContext<'_, S>,
    operation: &str,
    args: &[String],
) -> Result<InvokeResponse, DispatchError> {
    match operation {
        "CreateAsset" => {
            let [id, product_type, quantity, unit, origin, role] =
                expect_args("CreateAsset", args)?;
            let quantity = parse_quantity(quantity)?;
            ctx.create_asset(id, product_type, quantity, unit, origin, role)?;
            Ok(InvokeResponse::Done)
        }
        "DeleteAsset" => {
            let [id, role] = expect_args("DeleteAsset", args)?;
            ctx.delete_asset(id, role)?;
            Ok(InvokeResponse::Done)
        }
        "UpdateStage" => {
            let [id, new_stage, role] = expect_args("UpdateStage", args)?;
            ctx.update_stage(id, new_stage, role)?;
            Ok(InvokeResponse::Done)
        }
        "ReadAsset" => {
            let [id] = expect_args("ReadAsset", args)?;
            Ok(InvokeResponse::Asset(ctx.read_asset(id)?))
        }
        "AssetExists" => {
            let [id] = expect_args("AssetExists", args)?;
            Ok(InvokeResponse::Exists(ctx.asset_exists(id)?))
        }
        other => Err(DispatchError::UnknownOperation(other.to_string())),
    }
}

fn expect_args<'a, const N: usize>(
    operation: &'static str,
    args: &'a [String],
) -> Result<[&'a str; N], DispatchError> {
    if args.len() != N {
        return Err(DispatchError::BadArity {
            operation,
            expected: N,
            actual: args.len(),
        });
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

fn parse_quantity(value: &str) -> Result<f64, DispatchError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|err| DispatchError::InvalidQuantity {
            value: value.to_string(),
            reason: err.to_string(),
        })
}
