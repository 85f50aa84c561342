//! Property tests for balance and status invariants.

use proptest::prelude::*;
use sim_registry::cards::{CardStatus, SimProvider};
use sim_registry::core::{SimError, TariffConfig};

const MAX_CREDIT: i64 = 1_000_000;

proptest! {
    #[test]
    fn recharge_adds_amount(start in 0..MAX_CREDIT, amount in 0..MAX_CREDIT) {
        let mut provider = SimProvider::new("AirTel");
        let card = provider.create_card_with_balance("1", start).unwrap();

        let receipt = card.recharge(amount).unwrap();
        prop_assert_eq!(receipt.balance, start + amount);
        prop_assert!(card.is_active());
    }

    #[test]
    fn inactive_recharge_leaves_balance(start in 0..MAX_CREDIT, amount in 0..MAX_CREDIT) {
        let mut provider = SimProvider::new("AirTel");
        let card = provider.create_card_with_balance("1", start).unwrap();
        card.deactivate();

        let is_inactive_err = matches!(card.recharge(amount), Err(SimError::InactiveCard { .. }));
        prop_assert!(is_inactive_err);
        prop_assert_eq!(card.balance(), start);
    }

    #[test]
    fn call_deducts_or_rejects(start in 0..MAX_CREDIT, minutes in 0..MAX_CREDIT) {
        let mut provider = SimProvider::new("AirTel");
        let card = provider.create_card_with_balance("1", start).unwrap();

        let result = card.make_call(minutes);
        if start >= 2 * minutes {
            prop_assert_eq!(result.unwrap().balance, start - 2 * minutes);
            prop_assert_eq!(card.balance(), start - 2 * minutes);
        } else {
            let is_insufficient = matches!(result, Err(SimError::InsufficientBalance { .. }));
            prop_assert!(is_insufficient);
            prop_assert_eq!(card.balance(), start);
        }
        prop_assert!(card.balance() >= 0);
    }

    #[test]
    fn call_never_raises_balance(
        rate in 0i64..10,
        start in 0..MAX_CREDIT,
        minutes in 0..MAX_CREDIT,
    ) {
        let tariff = TariffConfig::new("AirTel").with_call_rate(rate);
        let mut provider = SimProvider::with_config(tariff).unwrap();
        let card = provider.create_card_with_balance("1", start).unwrap();

        if let Ok(receipt) = card.make_call(minutes) {
            prop_assert!(receipt.cost >= 0);
        }
        prop_assert!(card.balance() <= start);
        prop_assert!(card.balance() >= 0);
    }

    #[test]
    fn toggling_status_keeps_balance(start in 0..MAX_CREDIT, toggles in 1usize..8) {
        let mut provider = SimProvider::new("AirTel");
        let card = provider.create_card_with_balance("1", start).unwrap();

        for _ in 0..toggles {
            card.deactivate();
        }
        card.activate();

        prop_assert_eq!(card.status(), CardStatus::Active);
        prop_assert_eq!(card.balance(), start);
    }

    #[test]
    fn negative_inputs_rejected(amount in i64::MIN..0) {
        let mut provider = SimProvider::new("AirTel");
        let card = provider.create_card_with_balance("1", 100).unwrap();

        let recharge_invalid = matches!(card.recharge(amount), Err(SimError::InvalidArgument { .. }));
        let call_invalid = matches!(card.make_call(amount), Err(SimError::InvalidArgument { .. }));
        prop_assert!(recharge_invalid);
        prop_assert!(call_invalid);
        prop_assert_eq!(card.balance(), 100);
    }

    #[test]
    fn duplicate_ids_never_grow_registry(ids in proptest::collection::vec("[0-9]{1,3}", 1..20)) {
        let mut provider = SimProvider::new("AirTel");
        let mut unique = std::collections::HashSet::new();

        for id in &ids {
            let created = provider.create_card(id.as_str()).is_ok();
            prop_assert_eq!(created, unique.insert(id.clone()));
        }
        prop_assert_eq!(provider.len(), unique.len());
    }
}
