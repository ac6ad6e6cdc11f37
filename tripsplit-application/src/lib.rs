#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_service;
pub mod validation;

pub use error::{AmountError, ExpenseValidationError, TripSourceError, TripValidationError};
pub use model::{PersonBalance, SettlementResult, SharePreview};
pub use ports::TripSource;
pub use settlement_service::{SettlementService, preview_expense_shares};
pub use validation::{parse_amount, validate_expense, validate_trip};
