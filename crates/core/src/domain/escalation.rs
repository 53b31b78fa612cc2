use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Year-over-year growth policy for recurring SaaS revenue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationModel {
    /// Every projected year equals the base amount.
    #[default]
    Flat,
    /// Compound annual increase: year k = base * (1 + rate)^(k - 1).
    FixedPercent { annual_rate: Decimal },
    /// Price held flat for `freeze_years`, then escalation resumes with
    /// the exponent counted from the first post-freeze year.
    MultiYearFreeze { freeze_years: u32, annual_rate: Decimal },
}
