use crate::{
    model::{Expense, Money, SettlementContext},
    services::split_units,
};
use indexmap::IndexMap;

/// Net balance per member, in member insertion order.
///
/// Positive: the member is owed money. Negative: the member owes money.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalanceSheet<'a> {
    balances: IndexMap<&'a str, Money>,
}

impl<'a> BalanceSheet<'a> {
    pub fn get(&self, member: &str) -> Option<Money> {
        self.balances.get(member).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Money)> + '_ {
        self.balances
            .iter()
            .map(|(member, balance)| (*member, *balance))
    }

    pub fn members(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.balances.keys().copied()
    }

    pub fn total(&self) -> Money {
        self.balances.values().sum()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// True when every balance is zero.
    pub fn is_settled(&self) -> bool {
        self.balances.values().all(|balance| balance.is_zero())
    }
}

impl<'a> FromIterator<(&'a str, Money)> for BalanceSheet<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, Money)>>(iter: I) -> Self {
        let mut balances = IndexMap::new();
        for (member, balance) in iter {
            *balances.entry(member).or_insert(Money::ZERO) += balance;
        }
        Self { balances }
    }
}

pub struct BalanceAccumulator<'a> {
    balances: IndexMap<&'a str, Money>,
    context: SettlementContext,
}

impl<'a> BalanceAccumulator<'a> {
    /// Starts every member at zero. Repeated names share one entry.
    pub fn new<I>(members: I, context: SettlementContext) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut balances = IndexMap::new();
        for member in members {
            balances.entry(member).or_insert(Money::ZERO);
        }
        Self { balances, context }
    }

    /// Credits the payer and debits each participant of `expense`.
    ///
    /// The expense is applied whole or not at all: amounts without a
    /// minor-unit representation, or updates that would leave a balance
    /// outside the decimal range, skip it with a warning.
    pub fn apply(&mut self, expense: &'a Expense) {
        if expense.split_among.is_empty() {
            return;
        }

        let Some(units) = self.context.to_minor_units(expense.amount) else {
            tracing::warn!(
                expense_id = %expense.id,
                amount = %expense.amount,
                scale = self.context.scale,
                "Expense amount has no minor-unit representation; skipped"
            );
            return;
        };

        let mut deltas: IndexMap<&'a str, i128> =
            IndexMap::with_capacity(expense.split_among.len() + 1);
        deltas.insert(&expense.paid_by, units);
        let shares = split_units(units, expense.split_among.len());
        for (participant, share) in expense.split_among.iter().zip(shares) {
            *deltas.entry(participant).or_insert(0) -= share;
        }

        let updated: Option<Vec<(&'a str, Money)>> = deltas
            .into_iter()
            .map(|(member, delta)| {
                let current = match self.balances.get(member) {
                    Some(balance) => self.context.to_minor_units(*balance)?,
                    None => 0,
                };
                let next = current.checked_add(delta)?;
                self.context
                    .from_minor_units(next)
                    .map(|balance| (member, balance))
            })
            .collect();

        let Some(updated) = updated else {
            tracing::warn!(
                expense_id = %expense.id,
                amount = %expense.amount,
                "Expense would push a balance out of range; skipped"
            );
            return;
        };

        for (member, balance) in updated {
            if !self.balances.contains_key(member) {
                tracing::warn!(member, "Expense references a name outside the member list");
            }
            self.balances.insert(member, balance);
        }
    }

    pub fn apply_all<I>(&mut self, expenses: I)
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        for expense in expenses {
            self.apply(expense);
        }
    }

    pub fn into_sheet(self) -> BalanceSheet<'a> {
        BalanceSheet {
            balances: self.balances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn expense(amount: Money, paid_by: &str, split_among: &[&str]) -> Expense {
        Expense {
            id: "1".to_string(),
            description: "test".to_string(),
            amount,
            paid_by: paid_by.to_string(),
            split_among: split_among.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[fixture]
    fn members() -> Vec<&'static str> {
        vec!["A", "B", "C"]
    }

    #[rstest]
    fn payer_included_in_split(members: Vec<&'static str>) {
        let dinner = expense(Money::from_i64(300), "A", &["A", "B", "C"]);
        let mut accumulator = BalanceAccumulator::new(members, SettlementContext::default());
        accumulator.apply(&dinner);
        let sheet = accumulator.into_sheet();

        assert_eq!(sheet.get("A"), Some(Money::from_i64(200)));
        assert_eq!(sheet.get("B"), Some(Money::from_i64(-100)));
        assert_eq!(sheet.get("C"), Some(Money::from_i64(-100)));
        assert!(sheet.total().is_zero());
    }

    #[rstest]
    fn single_member_split_is_a_no_op(members: Vec<&'static str>) {
        let snack = expense(Money::from_i64(40), "B", &["B"]);
        let mut accumulator = BalanceAccumulator::new(members, SettlementContext::default());
        accumulator.apply(&snack);

        assert!(accumulator.into_sheet().is_settled());
    }

    #[rstest]
    fn empty_split_is_ignored(members: Vec<&'static str>) {
        let broken = expense(Money::from_i64(40), "B", &[]);
        let mut accumulator = BalanceAccumulator::new(members, SettlementContext::default());
        accumulator.apply(&broken);

        assert!(accumulator.into_sheet().is_settled());
    }

    #[rstest]
    fn uneven_split_keeps_zero_sum(members: Vec<&'static str>) {
        let taxi = expense(Money::from_i64(100), "C", &["A", "B", "C"]);
        let mut accumulator = BalanceAccumulator::new(members, SettlementContext::default());
        accumulator.apply(&taxi);
        let sheet = accumulator.into_sheet();

        assert_eq!(sheet.get("A"), Some(Money::new(-3334, 2)));
        assert_eq!(sheet.get("B"), Some(Money::new(-3333, 2)));
        assert_eq!(sheet.get("C"), Some(Money::new(6667, 2)));
        assert!(sheet.total().is_zero());
    }

    #[test]
    fn duplicate_member_names_collapse() {
        let lunch = expense(Money::from_i64(90), "A", &["A", "B", "C"]);
        let mut accumulator =
            BalanceAccumulator::new(["A", "B", "A", "C"], SettlementContext::default());
        accumulator.apply(&lunch);
        let sheet = accumulator.into_sheet();

        assert_eq!(sheet.members().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(sheet.get("A"), Some(Money::from_i64(60)));
    }

    #[test]
    fn unknown_names_are_appended_after_members() {
        let fuel = expense(Money::from_i64(20), "Z", &["A", "Z"]);
        let mut accumulator = BalanceAccumulator::new(["A", "B"], SettlementContext::default());
        accumulator.apply(&fuel);
        let sheet = accumulator.into_sheet();

        assert_eq!(sheet.members().collect::<Vec<_>>(), vec!["A", "B", "Z"]);
        assert_eq!(sheet.get("Z"), Some(Money::from_i64(10)));
        assert_eq!(sheet.get("A"), Some(Money::from_i64(-10)));
    }

    #[rstest]
    #[case::twice_without_payer(&["B", "B"], &[("A", 10000), ("B", -10000), ("C", 0)])]
    #[case::twice_with_uneven_remainder(
        &["A", "B", "B"],
        &[("A", 6666), ("B", -6666), ("C", 0)]
    )]
    fn repeated_participant_is_debited_per_listing(
        members: Vec<&'static str>,
        #[case] split_among: &[&str],
        #[case] expected_cents: &[(&str, i64)],
    ) {
        let groceries = expense(Money::from_i64(100), "A", split_among);
        let mut accumulator = BalanceAccumulator::new(members, SettlementContext::default());
        accumulator.apply(&groceries);

        let sheet = accumulator.into_sheet();
        for (member, cents) in expected_cents {
            assert_eq!(sheet.get(member), Some(Money::new(*cents, 2)), "{member}");
        }
        assert!(sheet.total().is_zero());
    }

    #[test]
    fn expense_overflowing_a_balance_is_skipped_whole() {
        let huge = Money::from_decimal("50000000000000000000000000000".parse().expect("decimal"));
        let first = expense(huge, "A", &["B"]);
        let second = expense(huge, "A", &["B"]);
        let mut accumulator = BalanceAccumulator::new(["A", "B"], SettlementContext { scale: 0 });

        accumulator.apply_all([&first, &second]);

        let sheet = accumulator.into_sheet();
        assert_eq!(sheet.get("A"), Some(huge));
        assert_eq!(sheet.get("B"), Some(-huge));
    }

    #[test]
    fn amount_without_minor_units_is_skipped() {
        let huge = Money::from_decimal("50000000000000000000000000000".parse().expect("decimal"));
        let fuel = expense(huge, "A", &["B"]);
        let mut accumulator = BalanceAccumulator::new(["A", "B"], SettlementContext::default());

        accumulator.apply(&fuel);

        assert!(accumulator.into_sheet().is_settled());
    }

    #[test]
    fn sheet_from_iter_sums_repeated_members() {
        let sheet: BalanceSheet<'_> = [
            ("A", Money::from_i64(10)),
            ("B", Money::from_i64(-4)),
            ("A", Money::from_i64(-6)),
        ]
        .into_iter()
        .collect();

        assert_eq!(sheet.get("A"), Some(Money::from_i64(4)));
        assert_eq!(sheet.len(), 2);
    }
}
