//! Role gate for the mutating operations.
//!
//! The role is taken as the caller claims it, not derived from a verified
//! credential bound to the caller identity. That trust boundary is inherited
//! from the deployed behavior and kept visible here rather than silently
//! hardened; binding roles to substrate-verified identity attributes is the
//! substrate integration's job.

use std::fmt;

use tracing::warn;

use crate::error::ContractError;

pub const ROLE_PRODUCER: &str = "producer";
pub const ROLE_LOGISTICS: &str = "logistics";

/// Mutating operations subject to the gate. Reads are unrestricted and never
/// pass through here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    UpdateStage,
    Delete,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Create => "CreateAsset",
            Operation::UpdateStage => "UpdateStage",
            Operation::Delete => "DeleteAsset",
        }
    }

    pub fn required_roles(self) -> &'static [&'static str] {
        match self {
            Operation::Create | Operation::Delete => &[ROLE_PRODUCER],
            Operation::UpdateStage => &[ROLE_PRODUCER, ROLE_LOGISTICS],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pure allow/deny predicate: no store access, no side effects.
pub fn require_role(operation: Operation, role: &str) -> Result<(), ContractError> {
    let required = operation.required_roles();
    if required.contains(&role) {
        return Ok(());
    }
    warn!(%operation, role, "role rejected");
    Err(ContractError::AccessDenied {
        operation: operation.name(),
        required,
        role: role.to_string(),
    })
}
