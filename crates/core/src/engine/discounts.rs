use rust_decimal::Decimal;

use crate::domain::discounts::DiscountConfiguration;
use crate::errors::EngineError;
use crate::money::{percent_from_fraction, round_currency};

/// Effective SaaS discount fractions after stacking. The year-1 and
/// all-years percentages are each computed against the same pre-discount
/// base and summed; they never compound with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaasDiscountFractions {
    /// Applied to year 1: year-1 discount plus all-years discount.
    pub year_one: Decimal,
    /// Applied to every year after the first.
    pub later_years: Decimal,
}

pub fn saas_discount_fractions(
    config: &DiscountConfiguration,
) -> Result<SaasDiscountFractions, EngineError> {
    let year1 = config.saas_year1.unwrap_or(Decimal::ZERO);
    let all_years = config.saas_all_years.unwrap_or(Decimal::ZERO);
    ensure_fraction("saas_year1", year1)?;
    ensure_fraction("saas_all_years", all_years)?;

    let combined = year1 + all_years;
    if combined > Decimal::ONE {
        return Err(EngineError::InvalidDiscountCombination {
            combined_percent: percent_from_fraction(combined),
        });
    }

    Ok(SaasDiscountFractions { year_one: combined, later_years: all_years })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupDiscountOutcome {
    pub total_before: Decimal,
    pub total_after: Decimal,
    /// The discount actually taken off; equals `requested_discount` unless
    /// the clamp fired.
    pub discount_amount: Decimal,
    pub requested_discount: Decimal,
    /// Set when the discount exceeded the setup amount and the result was
    /// floored at zero. Advisory, never an error: source data may
    /// legitimately produce the clamp.
    pub clamped: bool,
}

/// Applies setup discounts: percentage first, then the fixed amount, with
/// the result floored at zero.
pub fn apply_setup_discount(
    setup_total: Decimal,
    config: &DiscountConfiguration,
) -> Result<SetupDiscountOutcome, EngineError> {
    let percent = config.setup_percent.unwrap_or(Decimal::ZERO);
    let fixed = config.setup_fixed.unwrap_or(Decimal::ZERO);
    ensure_fraction("setup_percent", percent)?;
    if fixed < Decimal::ZERO {
        return Err(EngineError::InvalidRequest(format!(
            "setup_fixed discount {fixed} cannot be negative"
        )));
    }

    let after_percent = round_currency(setup_total * (Decimal::ONE - percent));
    let after_fixed = after_percent - fixed;
    let clamped = after_fixed < Decimal::ZERO;
    let total_after = if clamped { Decimal::ZERO } else { after_fixed };

    Ok(SetupDiscountOutcome {
        total_before: setup_total,
        total_after,
        discount_amount: setup_total - total_after,
        requested_discount: setup_total - after_fixed,
        clamped,
    })
}

fn ensure_fraction(name: &str, value: Decimal) -> Result<(), EngineError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidRequest(format!(
            "{name} discount {value} must be a fraction in [0, 1]"
        )));
    }
    Ok(())
}
