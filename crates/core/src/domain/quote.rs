use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::discounts::DiscountConfiguration;
use crate::domain::escalation::EscalationModel;
use crate::domain::milestones::{Milestone, MilestoneTerms};
use crate::domain::product::ProductId;
use crate::domain::referrer::{ReferralCommission, ReferralTerms};
use crate::domain::sku::SkuId;
use crate::domain::travel::{TravelEstimate, TravelPlan};
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

impl QuoteId {
    pub fn generate() -> Self {
        Self(format!("Q-{}", Uuid::new_v4()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
    Active,
    Archived,
}

/// Sequential version number within a quote: starts at 1, gap-free,
/// strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionNumber(pub u32);

impl VersionNumber {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A SaaS product selection with its price frozen at computation time.
/// Later edits to the product's pricing table never alter this line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaasLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub monthly_unit_price: Decimal,
    pub monthly_total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupLineItem {
    pub sku_id: SkuId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    /// Delivery ordering only; has no effect on pricing.
    pub sequence_order: Option<u32>,
}

/// Projected figures for one contract year. SaaS amounts are
/// post-discount; setup and travel are attributed to year 1. The
/// level-loaded fields are populated on every year when level loading is
/// enabled over a multi-year horizon, as an even-payment view alongside
/// the escalated figures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: u32,
    pub saas_monthly: Decimal,
    pub saas_annual: Decimal,
    pub saas_monthly_level_loaded: Option<Decimal>,
    pub saas_annual_level_loaded: Option<Decimal>,
    pub setup: Decimal,
    pub travel: Decimal,
    pub total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTotals {
    pub saas_monthly: Decimal,
    pub saas_annual_year1: Decimal,
    pub setup: Decimal,
    pub travel: Decimal,
    pub contracted: Decimal,
}

/// Non-fatal markers recorded on a computed version. The caller decides
/// whether to surface them; they never block version creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    SetupDiscountClamped { requested: Decimal, applied: Decimal },
}

/// An immutable snapshot of all pricing inputs and every computed output.
/// Corrections construct a new version; stored outputs are never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteVersion {
    pub number: VersionNumber,
    pub description: Option<String>,
    pub saas_lines: Vec<SaasLineItem>,
    pub setup_lines: Vec<SetupLineItem>,
    pub discounts: DiscountConfiguration,
    pub escalation: EscalationModel,
    pub projection_years: u32,
    /// Present the SaaS schedule as even annual payments across the
    /// horizon, alongside the escalated figures.
    pub level_loading: bool,
    /// Applies the flat teller-payments discount to the SaaS base.
    pub teller_payments: bool,
    pub referral: ReferralTerms,
    pub travel: TravelPlan,
    pub milestone_terms: MilestoneTerms,
    pub projection: Vec<YearProjection>,
    pub totals: VersionTotals,
    pub travel_estimate: TravelEstimate,
    pub commission: Option<ReferralCommission>,
    pub milestones: Vec<Milestone>,
    pub advisories: Vec<Advisory>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub client_name: String,
    pub status: QuoteStatus,
    versions: Vec<QuoteVersion>,
}

impl Quote {
    pub fn new(id: QuoteId, client_name: impl Into<String>) -> Self {
        Self { id, client_name: client_name.into(), status: QuoteStatus::Draft, versions: Vec::new() }
    }

    pub fn versions(&self) -> &[QuoteVersion] {
        &self.versions
    }

    pub fn latest_version(&self) -> Option<&QuoteVersion> {
        self.versions.last()
    }

    pub fn next_version_number(&self) -> VersionNumber {
        match self.versions.last() {
            Some(version) => version.number.next(),
            None => VersionNumber::first(),
        }
    }

    /// Appends a computed version. The history is append-only: the number
    /// must be exactly the next in sequence, and existing versions are
    /// never replaced.
    pub fn append_version(&mut self, version: QuoteVersion) -> Result<(), DomainError> {
        let expected = self.next_version_number();
        if version.number != expected {
            return Err(DomainError::NonSequentialVersion { expected, got: version.number });
        }
        self.versions.push(version);
        Ok(())
    }

    pub fn can_transition_to(&self, next: QuoteStatus) -> bool {
        matches!(
            (self.status, next),
            (QuoteStatus::Draft, QuoteStatus::Active)
                | (QuoteStatus::Draft, QuoteStatus::Archived)
                | (QuoteStatus::Active, QuoteStatus::Archived)
        )
    }

    pub fn transition_to(&mut self, next: QuoteStatus) -> Result<(), DomainError> {
        if self.can_transition_to(next) {
            self.status = next;
            return Ok(());
        }

        Err(DomainError::InvalidQuoteTransition { from: self.status, to: next })
    }
}
