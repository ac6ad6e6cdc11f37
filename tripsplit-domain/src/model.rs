use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use crate::services::BalanceSheet;

/// Largest minor-unit scale accepted by [`SettlementContext`].
pub const MAX_SETTLEMENT_SCALE: u32 = 6;

/// Largest expense amount, in whole currency units, accepted by validation.
///
/// At the largest scale this is 10^21 minor units per expense, far below the
/// 96-bit decimal mantissa.
pub const MAX_EXPENSE_AMOUNT: i64 = 1_000_000_000_000_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds half away from zero to `dp` decimal places.
    pub fn round_dp(self, dp: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Minor-unit configuration for one settlement run.
///
/// `scale` is the number of decimal places of the smallest currency unit:
/// 2 for cents, 0 for yen, 3 for fils.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementContext {
    pub scale: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedScale {
    pub scale: u32,
    pub max_supported: u32,
}

impl SettlementContext {
    pub fn new(scale: u32) -> Result<Self, UnsupportedScale> {
        if scale > MAX_SETTLEMENT_SCALE {
            return Err(UnsupportedScale {
                scale,
                max_supported: MAX_SETTLEMENT_SCALE,
            });
        }
        Ok(Self { scale })
    }

    /// Context for the currency's minor unit, falling back to two decimals for unknown codes.
    pub fn for_currency(code: &str) -> Self {
        Self {
            scale: crate::currency::currency_scale(code),
        }
    }

    /// Converts an amount to an integer count of minor units, rounding half away from zero.
    ///
    /// Returns `None` when the scaled value does not fit the decimal range.
    pub fn to_minor_units(self, amount: Money) -> Option<i128> {
        let factor = Decimal::from(10_i64.checked_pow(self.scale)?);
        amount
            .as_decimal()
            .checked_mul(factor)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i128()
    }

    /// Returns `None` when `units` does not fit the decimal mantissa.
    pub fn from_minor_units(self, units: i128) -> Option<Money> {
        Decimal::try_from_i128_with_scale(units, self.scale)
            .ok()
            .map(Money::from_decimal)
    }

    /// True when `amount` has no digits below the minor unit.
    pub fn is_representable(self, amount: Money) -> bool {
        amount.round_dp(self.scale) == amount
    }
}

impl Default for SettlementContext {
    fn default() -> Self {
        Self { scale: 2 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Money,
    pub paid_by: String,
    pub split_among: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
    pub currency: String,
    pub expenses: Vec<Expense>,
}

impl Trip {
    pub fn settlement_context(&self) -> SettlementContext {
        SettlementContext::for_currency(&self.currency)
    }
}

/// One payment instruction: `debtor` pays `amount` to `creditor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    pub debtor: &'a str,
    pub creditor: &'a str,
    pub amount: Money,
}

#[derive(Debug, PartialEq)]
pub struct Settlement<'a> {
    pub balances: BalanceSheet<'a>,
    pub transfers: Vec<Transfer<'a>>,
}
