use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::quote::{QuoteStatus, VersionNumber};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid quote transition from {from:?} to {to:?}")]
    InvalidQuoteTransition { from: QuoteStatus, to: QuoteStatus },
    #[error("version {got} breaks the sequence; the next version for this quote is {expected}")]
    NonSequentialVersion { expected: VersionNumber, got: VersionNumber },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    Product,
    Sku,
    TravelZone,
    Referrer,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Product => "product",
            Self::Sku => "sku",
            Self::TravelZone => "travel zone",
            Self::Referrer => "referrer",
        };
        f.write_str(label)
    }
}

/// Calculation failures. All indicate bad input or bad reference data and
/// are reported synchronously to the caller; none are retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("pricing table for {reference} is inconsistent: {reason}")]
    InconsistentPricingTable { reference: String, reason: String },
    #[error("quantity {quantity} for {reference} resolves to no pricing tier")]
    PricingTierExhausted { reference: String, quantity: u32 },
    #[error("combined SaaS discounts of {combined_percent}% exceed 100%")]
    InvalidDiscountCombination { combined_percent: Decimal },
    #[error("invalid referral rate: {reason}")]
    InvalidReferralRate { reason: String },
    #[error("custom milestones sum to {actual}, expected {expected}")]
    MilestoneSumMismatch { expected: Decimal, actual: Decimal },
    #[error("unknown {kind} reference: {id}")]
    UnknownReference { kind: ReferenceKind, id: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl EngineError {
    /// Stable machine-readable class for structured output and logs.
    pub fn class(&self) -> &'static str {
        match self {
            Self::InconsistentPricingTable { .. } => "inconsistent_pricing_table",
            Self::PricingTierExhausted { .. } => "pricing_tier_exhausted",
            Self::InvalidDiscountCombination { .. } => "invalid_discount_combination",
            Self::InvalidReferralRate { .. } => "invalid_referral_rate",
            Self::MilestoneSumMismatch { .. } => "milestone_sum_mismatch",
            Self::UnknownReference { .. } => "unknown_reference",
            Self::InvalidRequest(_) => "invalid_request",
        }
    }
}
