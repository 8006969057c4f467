use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Currency precision for every amount the schedule reports.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Round to whole cents, ties away from zero (0.005 -> 0.01, -0.005 -> -0.01).
///
/// The result always carries exactly two decimal places, so `625` comes back
/// as `625.00`.
pub fn round_half_up(value: Decimal) -> Money {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Zero with currency scale (`0.00`).
pub fn zero_money() -> Money {
    Decimal::new(0, CURRENCY_DECIMAL_PLACES)
}

/// True when the amount has no fraction of a cent (`12.50`, `12.500`, `12`).
pub fn is_whole_cents(value: Decimal) -> bool {
    value.round_dp(CURRENCY_DECIMAL_PLACES) == value
}
