//! Provider registry of SIM cards.
//!
//! The `SimProvider` owns every card it creates. Lookup is by `SimId`
//! (or plain `&str`), and listing follows creation order.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::instance::SimCard;
use super::receipt::CardSummary;
use super::status::CardStatus;
use crate::core::config::TariffConfig;
use crate::core::error::{SimError, SimResult};
use crate::core::id::SimId;

/// Named collection of SIM cards for one provider.
///
/// ## Example
///
/// ```
/// use sim_registry::cards::SimProvider;
///
/// let mut provider = SimProvider::new("AirTel");
/// provider.create_card("12345").unwrap();
///
/// let sim = provider.get_card_mut("12345").unwrap();
/// sim.recharge(100).unwrap();
/// sim.make_call(20).unwrap();
///
/// assert_eq!(provider.get_card("12345").unwrap().balance(), 60);
/// ```
#[derive(Clone, Debug)]
pub struct SimProvider {
    tariff: TariffConfig,
    cards: FxHashMap<SimId, SimCard>,
    /// Creation order, for listing.
    order: Vec<SimId>,
}

impl SimProvider {
    /// Create an empty provider with the default tariff.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tariff: TariffConfig::new(name),
            cards: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Create an empty provider with a custom tariff.
    pub fn with_config(tariff: TariffConfig) -> SimResult<Self> {
        tariff.validate()?;
        Ok(Self {
            tariff,
            cards: FxHashMap::default(),
            order: Vec::new(),
        })
    }

    /// Provider name stamped on every card.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.tariff.name
    }

    /// Tariff applied to newly created cards.
    #[must_use]
    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }

    /// Create a card with the tariff's opening balance.
    ///
    /// Returns `DuplicateId` without touching the registry if `id` is taken.
    pub fn create_card(&mut self, id: impl Into<SimId>) -> SimResult<&mut SimCard> {
        let opening = self.tariff.opening_balance;
        self.insert(id.into(), opening)
    }

    /// Create a card with an explicit opening balance.
    pub fn create_card_with_balance(
        &mut self,
        id: impl Into<SimId>,
        opening_balance: i64,
    ) -> SimResult<&mut SimCard> {
        if opening_balance < 0 {
            return Err(SimError::invalid(format!(
                "opening balance must be non-negative, got {opening_balance}"
            )));
        }
        self.insert(id.into(), opening_balance)
    }

    fn insert(&mut self, id: SimId, opening_balance: i64) -> SimResult<&mut SimCard> {
        match self.cards.entry(id) {
            Entry::Occupied(entry) => {
                debug!(provider = %self.tariff.name, sim = %entry.key(), "duplicate SIM id");
                Err(SimError::DuplicateId {
                    id: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                info!(provider = %self.tariff.name, sim = %id, opening_balance, "SIM created");

                let card = SimCard::new(
                    id.clone(),
                    self.tariff.name.clone(),
                    opening_balance,
                    self.tariff.call_rate,
                );
                self.order.push(id);
                Ok(entry.insert(card))
            }
        }
    }

    /// Get a card by id.
    #[must_use]
    pub fn get_card(&self, id: &str) -> Option<&SimCard> {
        self.cards.get(id)
    }

    /// Get a card by id for mutation. Changes are visible to later lookups.
    pub fn get_card_mut(&mut self, id: &str) -> Option<&mut SimCard> {
        self.cards.get_mut(id)
    }

    /// Like `get_card_mut`, but reports a missing id as `NotFound`.
    pub fn card_mut(&mut self, id: &str) -> SimResult<&mut SimCard> {
        self.cards.get_mut(id).ok_or_else(|| SimError::NotFound {
            id: SimId::new(id),
        })
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SimCard> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Summaries of every card, in creation order.
    pub fn list_cards(&self) -> impl Iterator<Item = CardSummary> + '_ {
        self.iter().map(SimCard::describe)
    }

    /// Cards with the given status, in creation order.
    pub fn find_by_status(&self, status: CardStatus) -> impl Iterator<Item = &SimCard> {
        self.iter().filter(move |c| c.status() == status)
    }

    /// Cards matching a predicate, in creation order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &SimCard>
    where
        F: Fn(&SimCard) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }

    /// Sum of all balances, saturating at `i64::MAX`.
    #[must_use]
    pub fn total_balance(&self) -> i64 {
        self.cards
            .values()
            .fold(0i64, |acc, c| acc.saturating_add(c.balance()))
    }
}
