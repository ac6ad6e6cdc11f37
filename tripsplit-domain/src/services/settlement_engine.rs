use crate::{
    model::{Expense, Money, Settlement, SettlementContext, Transfer, Trip},
    services::{BalanceAccumulator, BalanceSheet},
};

/// Settlement calculation service
///
/// Matches debtors to creditors with a stable-order two-pointer sweep. Both
/// sides keep member insertion order, so the result is deterministic and
/// holds at most `debtors + creditors - 1` transfers.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Computes balances for `members` from `expenses` and the transfers that settle them.
    pub fn settle<'a>(
        &self,
        members: &'a [String],
        expenses: &'a [Expense],
        context: SettlementContext,
    ) -> Settlement<'a> {
        let mut accumulator = BalanceAccumulator::new(members.iter().map(String::as_str), context);
        accumulator.apply_all(expenses);
        let balances = accumulator.into_sheet();
        let transfers = self.transfers_for(&balances);

        tracing::debug!(
            member_count = balances.len(),
            expense_count = expenses.len(),
            transfer_count = transfers.len(),
            scale = context.scale,
            "Settlement computed"
        );

        Settlement {
            balances,
            transfers,
        }
    }

    pub fn settle_trip<'a>(&self, trip: &'a Trip) -> Settlement<'a> {
        self.settle(&trip.members, &trip.expenses, trip.settlement_context())
    }

    /// Produces the transfers that zero every balance in `balances`.
    pub fn transfers_for<'a>(&self, balances: &BalanceSheet<'a>) -> Vec<Transfer<'a>> {
        let mut debtors: Vec<(&'a str, Money)> = Vec::new();
        let mut creditors: Vec<(&'a str, Money)> = Vec::new();
        for (member, balance) in balances.iter() {
            if balance.is_negative() {
                debtors.push((member, -balance));
            } else if balance.is_positive() {
                creditors.push((member, balance));
            }
        }

        let mut transfers =
            Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let (debtor, debt) = debtors[i];
            let (creditor, credit) = creditors[j];
            let payment = debt.min(credit);

            transfers.push(Transfer {
                debtor,
                creditor,
                amount: payment,
            });

            debtors[i].1 -= payment;
            creditors[j].1 -= payment;
            if debtors[i].1.is_zero() {
                i += 1;
            }
            if creditors[j].1.is_zero() {
                j += 1;
            }
        }

        transfers
    }
}
