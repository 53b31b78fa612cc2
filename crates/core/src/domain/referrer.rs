use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferrerId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    pub id: ReferrerId,
    pub name: String,
    /// Default commission rate as a fraction in [0, 1].
    pub default_rate: Decimal,
    pub active: bool,
}

/// Referral terms attached to a single quote version. The override, when
/// present, replaces the referrer's default rate for this version only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralTerms {
    pub referrer_id: Option<ReferrerId>,
    pub rate_override: Option<Decimal>,
}

/// Informational commission owed to a referrer. Never deducted from the
/// client-facing contract total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralCommission {
    pub referrer_id: ReferrerId,
    pub rate: Decimal,
    pub amount: Decimal,
}
