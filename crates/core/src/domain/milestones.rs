use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStyle {
    /// Initial payment up front, remainder split across the remaining
    /// project months.
    UpfrontPlusMonthly,
    /// Even split across the project duration; the initial-payment
    /// percentage is ignored.
    EqualInstallments,
    /// Externally supplied schedule, validated against the contract total.
    Custom,
}

/// A dated partial payment. `month` is 1-based from contract start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub month: u32,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneTerms {
    pub style: MilestoneStyle,
    /// Fraction of the total due at the first milestone, in [0, 1].
    pub initial_payment: Decimal,
    pub duration_months: u32,
    /// Required when `style` is `Custom`, ignored otherwise.
    pub custom: Option<Vec<Milestone>>,
}

impl Default for MilestoneTerms {
    fn default() -> Self {
        Self {
            style: MilestoneStyle::UpfrontPlusMonthly,
            initial_payment: Decimal::new(25, 2),
            duration_months: 10,
            custom: None,
        }
    }
}
