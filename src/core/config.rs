//! Provider tariff configuration.
//!
//! A provider is configured once at startup with a `TariffConfig`:
//! - `name`: provider identity stamped on every card it creates
//! - `call_rate`: credits charged per call minute
//! - `opening_balance`: credit a freshly created card starts with
//!
//! Cards copy the tariff values they need at creation, so they never
//! refer back to the provider.

use serde::{Deserialize, Serialize};

use super::error::{SimError, SimResult};

/// Credits charged per minute when no rate is configured.
pub const DEFAULT_CALL_RATE: i64 = 2;

/// Tariff and identity for a single provider.
///
/// ```
/// use sim_registry::core::TariffConfig;
///
/// let tariff = TariffConfig::new("AirTel").with_call_rate(3);
/// assert_eq!(tariff.call_rate, 3);
/// assert_eq!(tariff.opening_balance, 0);
/// assert!(tariff.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffConfig {
    /// Provider name (immutable once the registry exists).
    pub name: String,

    /// Credits per call minute.
    pub call_rate: i64,

    /// Balance assigned by `create_card`.
    #[serde(default)]
    pub opening_balance: i64,
}

impl TariffConfig {
    /// Create a tariff with the default call rate and a zero opening balance.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            call_rate: DEFAULT_CALL_RATE,
            opening_balance: 0,
        }
    }

    /// Set the per-minute call rate.
    #[must_use]
    pub fn with_call_rate(mut self, rate: i64) -> Self {
        self.call_rate = rate;
        self
    }

    /// Set the opening balance for new cards.
    #[must_use]
    pub fn with_opening_balance(mut self, balance: i64) -> Self {
        self.opening_balance = balance;
        self
    }

    /// Reject negative rates and opening balances.
    pub fn validate(&self) -> SimResult<()> {
        if self.call_rate < 0 {
            return Err(SimError::invalid(format!(
                "call rate must be non-negative, got {}",
                self.call_rate
            )));
        }
        if self.opening_balance < 0 {
            return Err(SimError::invalid(format!(
                "opening balance must be non-negative, got {}",
                self.opening_balance
            )));
        }
        Ok(())
    }
}
