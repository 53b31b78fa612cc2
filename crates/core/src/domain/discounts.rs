use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Independent discount knobs for a quote version. All percentages are
/// fractions in [0, 1]; conversion from the external 0-100 scale happens
/// at the boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountConfiguration {
    /// Percentage off year-1 SaaS only.
    pub saas_year1: Option<Decimal>,
    /// Percentage off SaaS in every projected year, year 1 included.
    pub saas_all_years: Option<Decimal>,
    /// Percentage off the setup subtotal, applied before the fixed amount.
    pub setup_percent: Option<Decimal>,
    /// Fixed amount off the setup subtotal, applied after the percentage.
    pub setup_fixed: Option<Decimal>,
}

impl DiscountConfiguration {
    pub fn is_empty(&self) -> bool {
        self.saas_year1.is_none()
            && self.saas_all_years.is_none()
            && self.setup_percent.is_none()
            && self.setup_fixed.is_none()
    }
}
