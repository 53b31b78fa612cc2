pub mod domain;
pub mod engine;
pub mod errors;
pub mod money;

pub use domain::discounts::DiscountConfiguration;
pub use domain::escalation::EscalationModel;
pub use domain::milestones::{Milestone, MilestoneStyle, MilestoneTerms};
pub use domain::product::{PricingTier, ProductId, ProductPricingTable, SaasProduct};
pub use domain::quote::{
    Advisory, Quote, QuoteId, QuoteStatus, QuoteVersion, SaasLineItem, SetupLineItem,
    VersionNumber, VersionTotals, YearProjection,
};
pub use domain::referrer::{Referrer, ReferrerId, ReferralCommission, ReferralTerms};
pub use domain::sku::{SkuDefinition, SkuId, SkuPrice};
pub use domain::travel::{TravelEstimate, TravelPlan, TravelZone, TravelZoneId, TripCost, TripPlan};
pub use engine::{
    calculate_version, DeterministicVersionCalculator, ReferenceSnapshot, SaasSelection,
    SetupSelection, VersionCalculator, VersionRequest,
};
pub use errors::{DomainError, EngineError, ReferenceKind};
pub use money::{percent_from_fraction, round_currency, round_currency_down, CURRENCY_DP};
