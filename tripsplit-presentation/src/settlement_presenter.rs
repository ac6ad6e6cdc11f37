use std::fmt::Write as _;

use tripsplit_application::{PersonBalance, SharePreview};
use tripsplit_domain::{Money, Transfer};
use tripsplit_i18n as i18n;

/// Formats `amount` with two decimals, rounding half away from zero.
pub fn format_amount(amount: Money, symbol: &str) -> String {
    let rounded = amount.round_dp(2).as_decimal();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// `"<debtor> pays <symbol><amount> to <creditor>"`
pub fn format_transfer_line(transfer: &Transfer<'_>, symbol: &str) -> String {
    i18n::transfer_line(
        transfer.debtor,
        transfer.creditor,
        format_amount(transfer.amount, symbol),
    )
}

/// One transfer per line, joined with `\n`, in settlement order.
pub fn format_transfer_lines(transfers: &[Transfer<'_>], symbol: &str) -> String {
    transfers
        .iter()
        .map(|transfer| format_transfer_line(transfer, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_share_preview_lines(previews: &[SharePreview<'_>], symbol: &str) -> Vec<String> {
    previews
        .iter()
        .map(|preview| {
            i18n::share_line(
                preview.debtor,
                preview.creditor,
                format_amount(preview.amount, symbol),
            )
        })
        .collect()
}

pub struct BalancePresenter;

impl BalancePresenter {
    pub fn render(balances: &[PersonBalance<'_>], symbol: &str) -> String {
        let mut reply = String::with_capacity(32 * balances.len());
        for person in balances {
            let sign = if person.balance.round_dp(2).is_negative() {
                ""
            } else {
                "+"
            };
            let _ = writeln!(
                &mut reply,
                "{}: {sign}{}",
                person.name,
                format_amount(person.balance, symbol)
            );
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole(Money::from_i64(100), "$", "$100.00")]
    #[case::cents(Money::new(3333, 2), "€", "€33.33")]
    #[case::rounds_half_up(Money::new(1005, 3), "$", "$1.01")]
    #[case::yen(Money::from_i64(333), "¥", "¥333.00")]
    #[case::negative(Money::new(-2550, 2), "£", "-£25.50")]
    #[case::no_symbol(Money::new(5, 1), "", "0.50")]
    #[case::negative_rounding_to_zero(Money::new(-1, 3), "$", "$0.00")]
    fn formats_amounts(#[case] amount: Money, #[case] symbol: &str, #[case] expected: &str) {
        assert_eq!(format_amount(amount, symbol), expected);
    }

    #[test]
    fn transfer_lines_follow_settlement_order() {
        let transfers = [
            Transfer {
                debtor: "B",
                creditor: "A",
                amount: Money::from_i64(100),
            },
            Transfer {
                debtor: "C",
                creditor: "A",
                amount: Money::new(3333, 2),
            },
        ];

        assert_eq!(
            format_transfer_lines(&transfers, "$"),
            "B pays $100.00 to A\nC pays $33.33 to A"
        );
    }

    #[test]
    fn no_transfers_render_empty_text() {
        assert_eq!(format_transfer_lines(&[], "$"), "");
    }

    #[test]
    fn share_previews_render_owes_lines() {
        let previews = [SharePreview {
            debtor: "Ben",
            creditor: "Asha",
            amount: Money::new(1250, 2),
        }];

        assert_eq!(
            format_share_preview_lines(&previews, "₹"),
            vec!["Ben owes Asha ₹12.50".to_string()]
        );
    }

    #[test]
    fn sub_cent_debt_renders_as_non_negative_zero() {
        let balances = [
            PersonBalance {
                name: "A",
                balance: Money::new(1, 3),
            },
            PersonBalance {
                name: "B",
                balance: Money::new(-1, 3),
            },
            PersonBalance {
                name: "C",
                balance: Money::new(-5, 3),
            },
        ];

        assert_eq!(
            BalancePresenter::render(&balances, "BD"),
            "A: +BD0.00\nB: +BD0.00\nC: -BD0.01\n"
        );
    }

    #[test]
    fn balances_carry_explicit_sign() {
        let balances = [
            PersonBalance {
                name: "A",
                balance: Money::from_i64(200),
            },
            PersonBalance {
                name: "B",
                balance: Money::from_i64(-100),
            },
            PersonBalance {
                name: "C",
                balance: Money::ZERO,
            },
        ];

        assert_eq!(
            BalancePresenter::render(&balances, "$"),
            "A: +$200.00\nB: -$100.00\nC: +$0.00\n"
        );
    }
}
