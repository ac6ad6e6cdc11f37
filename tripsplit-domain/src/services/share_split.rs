use crate::model::{Money, SettlementContext};

/// Splits `amount` into `count` equal shares in minor units.
///
/// Shares differ by at most one minor unit and always sum to `amount` rounded
/// to the context scale. Leftover units go to the earliest shares. Returns
/// `None` when `amount` has no minor-unit representation at this scale.
pub fn split_evenly(amount: Money, count: usize, context: SettlementContext) -> Option<Vec<Money>> {
    let units = context.to_minor_units(amount)?;
    split_units(units, count)
        .into_iter()
        .map(|share| context.from_minor_units(share))
        .collect()
}

/// Splits `units` into `count` integer shares, earliest shares taking the remainder.
pub fn split_units(units: i128, count: usize) -> Vec<i128> {
    if count == 0 {
        return Vec::new();
    }

    let divisor = count as i128;
    let base = units / divisor;
    let remainder = (units % divisor).unsigned_abs() as usize;
    let step = units.signum();

    (0..count)
        .map(|idx| if idx < remainder { base + step } else { base })
        .collect()
}
