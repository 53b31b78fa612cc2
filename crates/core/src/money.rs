use rust_decimal::{Decimal, RoundingStrategy};

/// Currency values carry two fractional digits at rest.
pub const CURRENCY_DP: u32 = 2;

/// Rounds to the smallest currency unit with round-half-even, avoiding
/// cumulative drift across repeated per-year rounding.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Rounds toward zero at the cent. Used where a rounded-up share could
/// overdraw the amount it is carved from.
pub fn round_currency_down(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToZero)
}

/// Outbound conversion from the internal fraction representation to the
/// external 0-100 scale.
pub fn percent_from_fraction(fraction: Decimal) -> Decimal {
    fraction * Decimal::ONE_HUNDRED
}
