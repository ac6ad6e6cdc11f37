use tripsplit_application::{ExpenseValidationError, TripValidationError};
use tripsplit_i18n as i18n;

pub fn format_trip_validation_error(error: &TripValidationError) -> String {
    match error {
        TripValidationError::MissingName => i18n::missing_trip_name().to_string(),
        TripValidationError::NoMembers => i18n::no_members().to_string(),
        TripValidationError::BlankMember { position } => i18n::blank_member(*position),
        TripValidationError::Expense(err) => format_expense_validation_error(err),
    }
}

pub fn format_expense_validation_error(error: &ExpenseValidationError) -> String {
    match error {
        ExpenseValidationError::MissingDescription { expense_id } => {
            i18n::missing_description(expense_id)
        }
        ExpenseValidationError::InvalidAmount { expense_id, source } => {
            i18n::invalid_amount(expense_id, source)
        }
        ExpenseValidationError::EmptySplit { expense_id } => i18n::empty_split(expense_id),
        ExpenseValidationError::UnknownPayer { expense_id, name }
        | ExpenseValidationError::UnknownParticipant { expense_id, name } => {
            i18n::unknown_member(expense_id, name)
        }
    }
}
