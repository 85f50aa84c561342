//! Error taxonomy for card and registry operations.
//!
//! Every variant is a routine, recoverable outcome. Nothing in the crate
//! panics on these conditions; they come back as `Err` to the immediate
//! caller, which decides how to render them.

use thiserror::Error;

use super::id::SimId;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Why a card or registry operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// Recharge or call attempted on a deactivated card.
    #[error("SIM {id} is inactive")]
    InactiveCard { id: SimId },

    /// Call cost exceeds the available balance of an active card.
    #[error("insufficient balance on SIM {id}: balance {balance}, call cost {cost}")]
    InsufficientBalance { id: SimId, balance: i64, cost: i64 },

    /// Creation attempted with an id already held by the registry.
    #[error("SIM {id} already exists")]
    DuplicateId { id: SimId },

    /// Lookup of an id the registry does not hold.
    #[error("SIM {id} not found")]
    NotFound { id: SimId },

    /// Negative amounts, negative minutes, or arithmetic overflow.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl SimError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
