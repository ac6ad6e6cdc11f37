#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod model;
pub mod services;

pub use currency::{Currency, currency_scale, currency_symbol};
pub use model::{
    Expense, MAX_EXPENSE_AMOUNT, MAX_SETTLEMENT_SCALE, Money, Settlement, SettlementContext,
    Transfer, Trip, UnsupportedScale,
};
pub use services::{BalanceAccumulator, BalanceSheet, SettlementEngine, split_evenly, split_units};
