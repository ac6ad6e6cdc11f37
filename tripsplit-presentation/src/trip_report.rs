use std::fmt::Write as _;

use crate::settlement_presenter::{format_transfer_line, format_transfer_lines};
use tripsplit_domain::{Transfer, Trip};
use tripsplit_i18n as i18n;

/// Plain-text trip summary for clipboard and share targets.
pub struct TripReportPresenter;

impl TripReportPresenter {
    pub fn render(trip: &Trip, transfers: &[Transfer<'_>], symbol: &str) -> String {
        let mut text = String::with_capacity(256);

        let _ = writeln!(&mut text, "{}: {}", i18n::TRIP, trip.name);
        let _ = writeln!(&mut text, "{}: {}", i18n::MEMBERS, trip.members.join(", "));

        let _ = writeln!(&mut text, "\n{}:", i18n::EXPENSES);
        if trip.expenses.is_empty() {
            let _ = writeln!(&mut text, "{}", i18n::NO_EXPENSES_YET);
        } else {
            for (idx, expense) in trip.expenses.iter().enumerate() {
                let line = i18n::expense_line(
                    &expense.description,
                    format_args!("{symbol}{}", expense.amount),
                    &expense.paid_by,
                    expense.split_among.join(", "),
                );
                let _ = writeln!(&mut text, "{}. {line}", idx + 1);
            }
        }

        let _ = writeln!(&mut text, "\n{}:", i18n::SETTLEMENTS);
        if transfers.is_empty() {
            let _ = writeln!(&mut text, "{}", i18n::ALL_SETTLED);
        } else {
            for (idx, transfer) in transfers.iter().enumerate() {
                let _ = writeln!(
                    &mut text,
                    "{}. {}",
                    idx + 1,
                    format_transfer_line(transfer, symbol)
                );
            }
        }

        text
    }

    /// Transfers only, without numbering.
    pub fn render_settlements(transfers: &[Transfer<'_>], symbol: &str) -> String {
        if transfers.is_empty() {
            return i18n::ALL_SETTLED.to_string();
        }
        format_transfer_lines(transfers, symbol)
    }
}
