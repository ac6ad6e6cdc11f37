use crate::{
    error::TripValidationError,
    model::{PersonBalance, SettlementResult, SharePreview},
    validation::validate_trip,
};
use tripsplit_domain::{Money, SettlementContext, SettlementEngine, Trip, split_evenly};

/// Validates trips and runs the settlement engine on them.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementService {
    context_override: Option<SettlementContext>,
}

impl SettlementService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `context` for every trip instead of the trip currency's minor unit.
    pub fn with_context(context: SettlementContext) -> Self {
        Self {
            context_override: Some(context),
        }
    }

    pub fn context_for(&self, trip: &Trip) -> SettlementContext {
        self.context_override
            .unwrap_or_else(|| trip.settlement_context())
    }

    pub fn settle<'a>(&self, trip: &'a Trip) -> Result<SettlementResult<'a>, TripValidationError> {
        let context = self.context_for(trip);
        validate_trip(trip, context)?;

        let settlement = SettlementEngine.settle(&trip.members, &trip.expenses, context);
        let balances = settlement
            .balances
            .iter()
            .map(|(name, balance)| PersonBalance { name, balance })
            .collect();

        tracing::info!(
            trip_id = %trip.id,
            expense_count = trip.expenses.len(),
            transfer_count = settlement.transfers.len(),
            "Trip settled"
        );

        Ok(SettlementResult {
            balances,
            transfers: settlement.transfers,
        })
    }
}

/// Per-participant shares of one expense, as shown while the expense is being entered.
///
/// The payer's own share is omitted. Returns nothing for an empty split, a
/// non-positive amount, or an amount with no minor-unit representation.
pub fn preview_expense_shares<'a>(
    split_among: &'a [String],
    amount: Money,
    paid_by: &'a str,
    context: SettlementContext,
) -> Vec<SharePreview<'a>> {
    if split_among.is_empty() || !amount.is_positive() || paid_by.is_empty() {
        return Vec::new();
    }
    let Some(shares) = split_evenly(amount, split_among.len(), context) else {
        return Vec::new();
    };

    split_among
        .iter()
        .zip(shares)
        .filter(|(participant, _)| participant.as_str() != paid_by)
        .map(|(participant, share)| SharePreview {
            debtor: participant,
            creditor: paid_by,
            amount: share,
        })
        .collect()
}
