#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod settlement_presenter;
pub mod trip_report;

pub use error_presenter::{format_expense_validation_error, format_trip_validation_error};
pub use settlement_presenter::{
    BalancePresenter, format_amount, format_share_preview_lines, format_transfer_line,
    format_transfer_lines,
};
pub use trip_report::TripReportPresenter;
