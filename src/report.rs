//! Human-readable rendering of operation outcomes.
//!
//! The card and registry types never print. Drivers format their results
//! through the `Display` impls here.
//!
//! ```
//! use sim_registry::cards::SimProvider;
//! use sim_registry::report::{CardInfo, Listing};
//!
//! let mut provider = SimProvider::new("AirTel");
//! let receipt = provider.create_card("12345").unwrap().recharge(100).unwrap();
//! assert_eq!(receipt.to_string(), "Recharged 100. New balance: 100");
//!
//! let info = CardInfo(provider.get_card("12345").unwrap().describe());
//! assert!(info.to_string().starts_with("SIM ID: 12345"));
//!
//! let listing = Listing(&provider).to_string();
//! assert!(listing.contains(" - 12345: AirTel, Balance: 100, Status: Active"));
//! ```

use std::fmt;

use crate::cards::{CallReceipt, CardStatus, CardSummary, Recharge, SimProvider, StatusChange};

impl fmt::Display for Recharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recharged {}. New balance: {}", self.amount, self.balance)
    }
}

impl fmt::Display for CallReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Call made for {} minutes. Remaining balance: {}",
            self.minutes, self.balance
        )
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.status {
            CardStatus::Active => "activated",
            CardStatus::Inactive => "deactivated",
        };
        write!(f, "SIM {} has been {}.", self.id, verb)
    }
}

/// One-line listing entry.
impl fmt::Display for CardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Balance: {}, Status: {}",
            self.id, self.provider, self.balance, self.status
        )
    }
}

/// Multi-line detail block for a single card.
#[derive(Clone, Debug)]
pub struct CardInfo(pub CardSummary);

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.0;
        write!(
            f,
            "SIM ID: {}\nProvider: {}\nBalance: {}\nStatus: {}",
            s.id, s.provider, s.balance, s.status
        )
    }
}

/// Every card held by a provider, one per line.
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a>(pub &'a SimProvider);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIMs under {}:", self.0.name())?;
        for summary in self.0.list_cards() {
            write!(f, "\n - {summary}")?;
        }
        Ok(())
    }
}
