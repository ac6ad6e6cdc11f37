use crate::error::{AmountError, ExpenseValidationError, TripValidationError};
use fxhash::FxHashSet;
use rust_decimal::Decimal;
use std::str::FromStr;
use tripsplit_domain::{Expense, MAX_EXPENSE_AMOUNT, Money, SettlementContext, Trip};

/// Parses user-entered amount text.
///
/// Accepts plain decimal notation only; the value must be positive, at most
/// [`MAX_EXPENSE_AMOUNT`], and fit the context's minor unit.
pub fn parse_amount(input: &str, context: SettlementContext) -> Result<Money, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let value =
        Decimal::from_str(trimmed).map_err(|_| AmountError::Unparsable(trimmed.to_string()))?;
    check_amount(Money::from_decimal(value), context)?;
    Ok(Money::from_decimal(value))
}

fn check_amount(amount: Money, context: SettlementContext) -> Result<(), AmountError> {
    if !amount.is_positive() {
        return Err(AmountError::NotPositive);
    }
    if amount > Money::from_i64(MAX_EXPENSE_AMOUNT) {
        return Err(AmountError::TooLarge {
            max: MAX_EXPENSE_AMOUNT,
        });
    }
    if !context.is_representable(amount) {
        return Err(AmountError::TooPrecise {
            scale: context.scale,
        });
    }
    Ok(())
}

pub fn validate_expense(
    expense: &Expense,
    members: &FxHashSet<&str>,
    context: SettlementContext,
) -> Result<(), ExpenseValidationError> {
    if expense.description.trim().is_empty() {
        return Err(ExpenseValidationError::MissingDescription {
            expense_id: expense.id.clone(),
        });
    }

    check_amount(expense.amount, context).map_err(|source| {
        ExpenseValidationError::InvalidAmount {
            expense_id: expense.id.clone(),
            source,
        }
    })?;

    if expense.split_among.is_empty() {
        return Err(ExpenseValidationError::EmptySplit {
            expense_id: expense.id.clone(),
        });
    }

    if !members.contains(expense.paid_by.as_str()) {
        return Err(ExpenseValidationError::UnknownPayer {
            expense_id: expense.id.clone(),
            name: expense.paid_by.clone(),
        });
    }

    if let Some(name) = expense
        .split_among
        .iter()
        .find(|name| !members.contains(name.as_str()))
    {
        return Err(ExpenseValidationError::UnknownParticipant {
            expense_id: expense.id.clone(),
            name: name.clone(),
        });
    }

    Ok(())
}

pub fn validate_trip(trip: &Trip, context: SettlementContext) -> Result<(), TripValidationError> {
    if trip.name.trim().is_empty() {
        return Err(TripValidationError::MissingName);
    }
    if trip.members.is_empty() {
        return Err(TripValidationError::NoMembers);
    }
    if let Some(position) = trip
        .members
        .iter()
        .position(|member| member.trim().is_empty())
    {
        return Err(TripValidationError::BlankMember {
            position: position + 1,
        });
    }

    let members: FxHashSet<&str> = trip.members.iter().map(String::as_str).collect();
    if members.len() == 1 {
        tracing::warn!(
            trip_id = %trip.id,
            "Trip has a single member; nothing will ever need settling"
        );
    }

    for expense in &trip.expenses {
        validate_expense(expense, &members, context)?;
    }

    Ok(())
}
