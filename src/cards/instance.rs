//! SIM card state and its mutation operations.
//!
//! `SimCard` tracks the balance and activation status of one SIM.
//! Every mutation goes through a method that enforces:
//! - balance never goes negative (calls are rejected, not clamped)
//! - inactive cards accept neither recharges nor calls
//!
//! ## Check Order
//!
//! `make_call` validates its argument, then checks status, then balance.
//! An inactive card with too little credit reports `InactiveCard`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::receipt::{CallReceipt, CardSummary, Recharge, StatusChange};
use super::status::CardStatus;
use crate::core::error::{SimError, SimResult};
use crate::core::id::SimId;

/// A single SIM record.
///
/// Created only by [`SimProvider`](super::registry::SimProvider); fields are
/// private so the balance invariant cannot be bypassed. Deserialized cards
/// are validated the same way: negative balances or rates are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct SimCard {
    id: SimId,
    provider: String,
    balance: i64,
    status: CardStatus,
    call_rate: i64,
}

/// Unvalidated wire form of a `SimCard`.
#[derive(Deserialize)]
struct CardRecord {
    id: SimId,
    provider: String,
    balance: i64,
    status: CardStatus,
    call_rate: i64,
}

impl TryFrom<CardRecord> for SimCard {
    type Error = SimError;

    fn try_from(record: CardRecord) -> SimResult<Self> {
        if record.balance < 0 {
            return Err(SimError::invalid(format!(
                "balance must be non-negative, got {}",
                record.balance
            )));
        }
        if record.call_rate < 0 {
            return Err(SimError::invalid(format!(
                "call rate must be non-negative, got {}",
                record.call_rate
            )));
        }
        Ok(Self {
            id: record.id,
            provider: record.provider,
            balance: record.balance,
            status: record.status,
            call_rate: record.call_rate,
        })
    }
}

impl SimCard {
    pub(crate) fn new(
        id: SimId,
        provider: impl Into<String>,
        balance: i64,
        call_rate: i64,
    ) -> Self {
        Self {
            id,
            provider: provider.into(),
            balance,
            status: CardStatus::Active,
            call_rate,
        }
    }

    /// Identifier within the owning provider.
    #[must_use]
    pub fn id(&self) -> &SimId {
        &self.id
    }

    /// Name of the provider that created this card.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Current credit. Never negative.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Current activation status.
    #[must_use]
    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// Check if recharges and calls are accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Credits charged per call minute.
    #[must_use]
    pub fn call_rate(&self) -> i64 {
        self.call_rate
    }

    /// Cost of a call of `minutes` without placing it.
    ///
    /// The cost is never negative, so a call can never raise the balance.
    pub fn call_cost(&self, minutes: i64) -> SimResult<i64> {
        if minutes < 0 {
            return Err(SimError::invalid(format!(
                "call minutes must be non-negative, got {minutes}"
            )));
        }
        if self.call_rate < 0 {
            return Err(SimError::invalid(format!(
                "call rate must be non-negative, got {}",
                self.call_rate
            )));
        }
        minutes
            .checked_mul(self.call_rate)
            .ok_or_else(|| SimError::invalid(format!("call of {minutes} minutes overflows cost")))
    }

    /// Add `amount` credit to an active card.
    pub fn recharge(&mut self, amount: i64) -> SimResult<Recharge> {
        if amount < 0 {
            return Err(SimError::invalid(format!(
                "recharge amount must be non-negative, got {amount}"
            )));
        }
        if !self.is_active() {
            debug!(sim = %self.id, amount, "recharge rejected: card inactive");
            return Err(SimError::InactiveCard {
                id: self.id.clone(),
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| SimError::invalid(format!("recharge of {amount} overflows balance")))?;
        debug!(sim = %self.id, amount, balance = self.balance, "recharged");

        Ok(Recharge {
            id: self.id.clone(),
            amount,
            balance: self.balance,
        })
    }

    /// Place a call of `minutes`, deducting `minutes * call_rate`.
    pub fn make_call(&mut self, minutes: i64) -> SimResult<CallReceipt> {
        let cost = self.call_cost(minutes)?;

        if !self.is_active() {
            debug!(sim = %self.id, minutes, "call rejected: card inactive");
            return Err(SimError::InactiveCard {
                id: self.id.clone(),
            });
        }
        if self.balance < cost {
            debug!(
                sim = %self.id,
                minutes,
                cost,
                balance = self.balance,
                "call rejected: insufficient balance"
            );
            return Err(SimError::InsufficientBalance {
                id: self.id.clone(),
                balance: self.balance,
                cost,
            });
        }

        self.balance -= cost;
        debug!(sim = %self.id, minutes, cost, balance = self.balance, "call placed");

        Ok(CallReceipt {
            id: self.id.clone(),
            minutes,
            cost,
            balance: self.balance,
        })
    }

    /// Mark the card inactive. Idempotent.
    pub fn deactivate(&mut self) -> StatusChange {
        self.set_status(CardStatus::Inactive)
    }

    /// Mark the card active. Idempotent.
    pub fn activate(&mut self) -> StatusChange {
        self.set_status(CardStatus::Active)
    }

    fn set_status(&mut self, status: CardStatus) -> StatusChange {
        let changed = self.status != status;
        self.status = status;
        debug!(sim = %self.id, %status, changed, "status set");

        StatusChange {
            id: self.id.clone(),
            status,
            changed,
        }
    }

    /// Snapshot for display.
    #[must_use]
    pub fn describe(&self) -> CardSummary {
        CardSummary {
            id: self.id.clone(),
            provider: self.provider.clone(),
            balance: self.balance,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_card(balance: i64) -> SimCard {
        SimCard::new(SimId::new("12345"), "AirTel", balance, 2)
    }

    #[test]
    fn test_new_card_is_active() {
        let card = test_card(0);

        assert!(card.is_active());
        assert_eq!(card.balance(), 0);
        assert_eq!(card.provider(), "AirTel");
        assert_eq!(card.id().as_str(), "12345");
    }

    #[test]
    fn test_recharge_active() {
        let mut card = test_card(0);

        let receipt = card.recharge(100).unwrap();
        assert_eq!(receipt.amount, 100);
        assert_eq!(receipt.balance, 100);
        assert_eq!(card.balance(), 100);
        assert!(card.is_active());
    }

    #[test]
    fn test_recharge_inactive_rejected() {
        let mut card = test_card(30);
        card.deactivate();

        let err = card.recharge(10).unwrap_err();
        assert_eq!(err, SimError::InactiveCard { id: SimId::new("12345") });
        assert_eq!(card.balance(), 30);
    }

    #[test]
    fn test_recharge_negative_rejected() {
        let mut card = test_card(30);

        assert!(matches!(card.recharge(-1), Err(SimError::InvalidArgument { .. })));
        assert_eq!(card.balance(), 30);
    }

    #[test]
    fn test_recharge_overflow_rejected() {
        let mut card = test_card(i64::MAX);

        assert!(matches!(card.recharge(1), Err(SimError::InvalidArgument { .. })));
        assert_eq!(card.balance(), i64::MAX);
    }

    #[test]
    fn test_make_call_deducts_cost() {
        let mut card = test_card(100);

        let receipt = card.make_call(20).unwrap();
        assert_eq!(receipt.cost, 40);
        assert_eq!(receipt.balance, 60);
        assert_eq!(card.balance(), 60);
    }

    #[test]
    fn test_make_call_exact_balance() {
        let mut card = test_card(40);

        card.make_call(20).unwrap();
        assert_eq!(card.balance(), 0);
    }

    #[test]
    fn test_make_call_insufficient_balance() {
        let mut card = test_card(10);

        let err = card.make_call(20).unwrap_err();
        assert_eq!(
            err,
            SimError::InsufficientBalance {
                id: SimId::new("12345"),
                balance: 10,
                cost: 40,
            }
        );
        assert_eq!(card.balance(), 10);
    }

    #[test]
    fn test_make_call_inactive_checked_before_balance() {
        let mut card = test_card(0);
        card.deactivate();

        // Both inactive and underfunded: status wins
        let err = card.make_call(20).unwrap_err();
        assert!(matches!(err, SimError::InactiveCard { .. }));
    }

    #[test]
    fn test_make_call_negative_minutes_rejected() {
        let mut card = test_card(10);

        assert!(matches!(card.make_call(-5), Err(SimError::InvalidArgument { .. })));
        assert_eq!(card.balance(), 10);
    }

    #[test]
    fn test_call_cost_uses_rate() {
        let card = SimCard::new(SimId::new("1"), "Jio", 0, 3);
        assert_eq!(card.call_cost(10).unwrap(), 30);
        assert!(card.call_cost(i64::MAX).is_err());
    }

    #[test]
    fn test_negative_rate_never_raises_balance() {
        let mut card = SimCard::new(SimId::new("1"), "Fake", 0, -3);

        assert!(matches!(card.call_cost(10), Err(SimError::InvalidArgument { .. })));
        assert!(matches!(card.make_call(10), Err(SimError::InvalidArgument { .. })));
        assert_eq!(card.balance(), 0);
    }

    #[test]
    fn test_deserialize_rejects_negative_rate() {
        let json = r#"{"id":"x","provider":"Fake","balance":0,"status":"Active","call_rate":-3}"#;

        assert!(serde_json::from_str::<SimCard>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_balance() {
        let json = r#"{"id":"x","provider":"Fake","balance":-50,"status":"Active","call_rate":2}"#;

        assert!(serde_json::from_str::<SimCard>(json).is_err());
    }

    #[test]
    fn test_card_serialization_roundtrip() {
        let mut card = test_card(60);
        card.deactivate();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: SimCard = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_activation_idempotent() {
        let mut card = test_card(30);

        assert!(card.deactivate().changed);
        assert!(!card.deactivate().changed);
        assert_eq!(card.status(), CardStatus::Inactive);

        let change = card.activate();
        assert!(change.changed);
        assert_eq!(change.status, CardStatus::Active);
        assert!(!card.activate().changed);
        assert_eq!(card.balance(), 30);
    }

    #[test]
    fn test_describe() {
        let mut card = test_card(30);
        card.deactivate();

        let summary = card.describe();
        assert_eq!(summary.id, SimId::new("12345"));
        assert_eq!(summary.provider, "AirTel");
        assert_eq!(summary.balance, 30);
        assert_eq!(summary.status.label(), "Inactive");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = test_card(60).describe();

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: CardSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(summary, deserialized);
    }
}
