//! Structured outcomes of card operations.
//!
//! Operations return these instead of printing. The `report` module turns
//! them into human-readable lines.

use serde::{Deserialize, Serialize};

use super::status::CardStatus;
use crate::core::id::SimId;

/// Successful recharge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recharge {
    pub id: SimId,
    pub amount: i64,
    /// Balance after the recharge.
    pub balance: i64,
}

/// Successful call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReceipt {
    pub id: SimId,
    pub minutes: i64,
    pub cost: i64,
    /// Balance remaining after the deduction.
    pub balance: i64,
}

/// Outcome of `activate` / `deactivate`. Always a success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: SimId,
    pub status: CardStatus,
    /// `false` when the card was already in `status`.
    pub changed: bool,
}

/// Read-only snapshot of a card for display or export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: SimId,
    pub provider: String,
    pub balance: i64,
    pub status: CardStatus,
}
