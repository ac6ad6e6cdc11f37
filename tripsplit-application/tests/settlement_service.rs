use proptest::prelude::*;
use rust_decimal::Decimal;
use tripsplit_application::{AmountError, SettlementService, parse_amount};
use tripsplit_domain::{Expense, Money, SettlementContext, Trip};

const NAMES: [&str; 5] = ["Asha", "Ben", "Chen", "Dara", "Eli"];

fn build_trip(member_count: usize, amounts: &[u32], payers: &[usize], masks: &[u8]) -> Trip {
    let members: Vec<String> = NAMES[..member_count]
        .iter()
        .map(|name| name.to_string())
        .collect();
    let expenses = amounts
        .iter()
        .enumerate()
        .map(|(idx, &cents)| {
            let mask = masks.get(idx).copied().unwrap_or(1);
            let mut split_among: Vec<String> = (0..member_count)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| NAMES[bit].to_string())
                .collect();
            if split_among.is_empty() {
                split_among.push(NAMES[0].to_string());
            }
            Expense {
                id: idx.to_string(),
                description: format!("expense {idx}"),
                amount: Money::new(i64::from(cents) + 1, 2),
                paid_by: NAMES[payers.get(idx).copied().unwrap_or(0) % member_count].to_string(),
                split_among,
            }
        })
        .collect();

    Trip {
        id: "1700000000000".to_string(),
        name: "Road trip".to_string(),
        members,
        currency: "USD".to_string(),
        expenses,
    }
}

proptest! {
    #[test]
    fn valid_trips_always_settle(
        member_count in 1usize..=5,
        amounts in prop::collection::vec(0u32..=500_000, 0..=20),
        payers in prop::collection::vec(0usize..=4, 0..=20),
        masks in prop::collection::vec(0u8..=31, 0..=20),
    ) {
        let trip = build_trip(member_count, &amounts, &payers, &masks);

        let result = SettlementService::new().settle(&trip);
        prop_assert!(result.is_ok());
        let result = result.unwrap();

        let total: Money = result.balances.iter().map(|person| person.balance).sum();
        prop_assert!(total.is_zero());

        let owed: Money = result
            .balances
            .iter()
            .filter(|person| person.balance.is_negative())
            .map(|person| -person.balance)
            .sum();
        let transferred: Money = result.transfers.iter().map(|transfer| transfer.amount).sum();
        prop_assert_eq!(owed, transferred);
    }

    #[test]
    fn non_positive_amounts_are_rejected(cents in -10_000_000i64..=0) {
        let text = Decimal::new(cents, 2).to_string();
        prop_assert_eq!(
            parse_amount(&text, SettlementContext::default()),
            Err(AmountError::NotPositive)
        );
    }
}
