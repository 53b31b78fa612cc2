pub mod discounts;
pub mod escalation;
pub mod milestones;
pub mod referral;
pub mod tiers;
pub mod travel;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::discounts::DiscountConfiguration;
use crate::domain::escalation::EscalationModel;
use crate::domain::milestones::MilestoneTerms;
use crate::domain::product::{ProductId, SaasProduct};
use crate::domain::quote::{
    Advisory, QuoteVersion, SaasLineItem, SetupLineItem, VersionNumber, VersionTotals,
    YearProjection,
};
use crate::domain::referrer::{Referrer, ReferrerId, ReferralTerms};
use crate::domain::sku::{SkuDefinition, SkuId, SkuPrice};
use crate::domain::travel::{TravelPlan, TravelZone, TravelZoneId};
use crate::errors::{EngineError, ReferenceKind};
use crate::money::round_currency;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Flat fraction taken off the SaaS base when teller payments are
/// enabled, before escalation and the configured discounts.
const TELLER_PAYMENTS_DISCOUNT: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Immutable read snapshot of reference data for one computation. The
/// calling layer supplies a consistent snapshot so concurrent admin edits
/// are never visible mid-computation; tests supply fixed fixtures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    #[serde(default)]
    pub products: Vec<SaasProduct>,
    #[serde(default)]
    pub skus: Vec<SkuDefinition>,
    #[serde(default)]
    pub zones: Vec<TravelZone>,
    #[serde(default)]
    pub referrers: Vec<Referrer>,
}

impl ReferenceSnapshot {
    pub fn product(&self, id: &ProductId) -> Option<&SaasProduct> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn sku(&self, id: &SkuId) -> Option<&SkuDefinition> {
        self.skus.iter().find(|sku| &sku.id == id)
    }

    pub fn zone(&self, id: &TravelZoneId) -> Option<&TravelZone> {
        self.zones.iter().find(|zone| &zone.id == id)
    }

    pub fn referrer(&self, id: &ReferrerId) -> Option<&Referrer> {
        self.referrers.iter().find(|referrer| &referrer.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaasSelection {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSelection {
    pub sku_id: SkuId,
    pub quantity: u32,
    pub sequence_order: Option<u32>,
}

/// All pricing inputs for one quote version. Selection order is
/// preserved through to the stored line items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRequest {
    pub description: Option<String>,
    #[serde(default)]
    pub saas: Vec<SaasSelection>,
    #[serde(default)]
    pub setup: Vec<SetupSelection>,
    #[serde(default)]
    pub discounts: DiscountConfiguration,
    #[serde(default)]
    pub escalation: EscalationModel,
    pub projection_years: u32,
    #[serde(default)]
    pub level_loading: bool,
    #[serde(default)]
    pub teller_payments: bool,
    #[serde(default)]
    pub referral: ReferralTerms,
    #[serde(default)]
    pub travel: TravelPlan,
    #[serde(default)]
    pub milestones: MilestoneTerms,
}

pub trait VersionCalculator: Send + Sync {
    fn calculate(
        &self,
        request: &VersionRequest,
        snapshot: &ReferenceSnapshot,
        number: VersionNumber,
    ) -> Result<QuoteVersion, EngineError>;
}

#[derive(Default)]
pub struct DeterministicVersionCalculator;

impl VersionCalculator for DeterministicVersionCalculator {
    fn calculate(
        &self,
        request: &VersionRequest,
        snapshot: &ReferenceSnapshot,
        number: VersionNumber,
    ) -> Result<QuoteVersion, EngineError> {
        calculate_version(request, snapshot, number)
    }
}

/// Derives every financial total for a quote version.
///
/// Runs the pipeline over the request in stages: resolve SaaS and setup
/// line prices, stack discounts, project SaaS across the horizon,
/// estimate travel, then compute the referral commission and milestone
/// schedule over the grand contracted total. Pure and synchronous; all
/// reference data comes from the supplied snapshot.
pub fn calculate_version(
    request: &VersionRequest,
    snapshot: &ReferenceSnapshot,
    number: VersionNumber,
) -> Result<QuoteVersion, EngineError> {
    let saas_lines = resolve_saas_lines(request, snapshot)?;
    let setup_lines = resolve_setup_lines(request, snapshot)?;

    let mut saas_monthly_base: Decimal = saas_lines.iter().map(|line| line.monthly_total).sum();
    if request.teller_payments {
        saas_monthly_base *= Decimal::ONE - TELLER_PAYMENTS_DISCOUNT;
    }
    let setup_subtotal: Decimal = setup_lines.iter().map(|line| line.total_price).sum();

    let fractions = discounts::saas_discount_fractions(&request.discounts)?;
    let setup_outcome = discounts::apply_setup_discount(setup_subtotal, &request.discounts)?;

    let projected_monthly =
        escalation::project_monthly(saas_monthly_base, request.projection_years, &request.escalation)?;

    let travel_zone = match &request.travel.zone_id {
        Some(zone_id) => Some(snapshot.zone(zone_id).ok_or_else(|| {
            EngineError::UnknownReference {
                kind: ReferenceKind::TravelZone,
                id: zone_id.0.clone(),
            }
        })?),
        None => None,
    };
    let travel_estimate = travel::estimate(travel_zone, &request.travel.trips);

    let mut projection = Vec::with_capacity(projected_monthly.len());
    let mut saas_all_years = Decimal::ZERO;
    for (index, monthly) in projected_monthly.iter().enumerate() {
        let year = index as u32 + 1;
        let fraction = if index == 0 { fractions.year_one } else { fractions.later_years };
        let saas_monthly = round_currency(monthly * (Decimal::ONE - fraction));
        let saas_annual = saas_monthly * MONTHS_PER_YEAR;
        saas_all_years += saas_annual;

        let setup = if index == 0 { setup_outcome.total_after } else { Decimal::ZERO };
        let travel = if index == 0 { travel_estimate.total } else { Decimal::ZERO };
        projection.push(YearProjection {
            year,
            saas_monthly,
            saas_annual,
            saas_monthly_level_loaded: None,
            saas_annual_level_loaded: None,
            setup,
            travel,
            total: saas_annual + setup + travel,
        });
    }

    // An even-payment view of the same SaaS total; the escalated figures
    // and the contracted total are unchanged by it.
    if request.level_loading && projection.len() > 1 {
        let level_annual = round_currency(saas_all_years / Decimal::from(projection.len() as u64));
        let level_monthly = round_currency(level_annual / MONTHS_PER_YEAR);
        for year in &mut projection {
            year.saas_annual_level_loaded = Some(level_annual);
            year.saas_monthly_level_loaded = Some(level_monthly);
        }
    }

    let totals = VersionTotals {
        saas_monthly: projection[0].saas_monthly,
        saas_annual_year1: projection[0].saas_annual,
        setup: setup_outcome.total_after,
        travel: travel_estimate.total,
        contracted: saas_all_years + setup_outcome.total_after + travel_estimate.total,
    };

    let referrer = match &request.referral.referrer_id {
        Some(referrer_id) => Some(snapshot.referrer(referrer_id).ok_or_else(|| {
            EngineError::UnknownReference {
                kind: ReferenceKind::Referrer,
                id: referrer_id.0.clone(),
            }
        })?),
        None => None,
    };
    let commission = referral::commission(totals.contracted, &request.referral, referrer)?;

    let milestones = milestones::allocate(totals.contracted, &request.milestones)?;

    let mut advisories = Vec::new();
    if setup_outcome.clamped {
        advisories.push(Advisory::SetupDiscountClamped {
            requested: setup_outcome.requested_discount,
            applied: setup_outcome.discount_amount,
        });
    }

    Ok(QuoteVersion {
        number,
        description: request.description.clone(),
        saas_lines,
        setup_lines,
        discounts: request.discounts.clone(),
        escalation: request.escalation.clone(),
        projection_years: request.projection_years,
        level_loading: request.level_loading,
        teller_payments: request.teller_payments,
        referral: request.referral.clone(),
        travel: request.travel.clone(),
        milestone_terms: request.milestones.clone(),
        projection,
        totals,
        travel_estimate,
        commission,
        milestones,
        advisories,
        created_at: Utc::now(),
    })
}

fn resolve_saas_lines(
    request: &VersionRequest,
    snapshot: &ReferenceSnapshot,
) -> Result<Vec<SaasLineItem>, EngineError> {
    let mut lines = Vec::with_capacity(request.saas.len());
    for selection in &request.saas {
        let product = snapshot.product(&selection.product_id).ok_or_else(|| {
            EngineError::UnknownReference {
                kind: ReferenceKind::Product,
                id: selection.product_id.0.clone(),
            }
        })?;

        let unit_price =
            tiers::resolve_unit_price(&product.code, &product.pricing, selection.quantity)?;
        lines.push(SaasLineItem {
            product_id: selection.product_id.clone(),
            quantity: selection.quantity,
            monthly_unit_price: unit_price,
            monthly_total: round_currency(unit_price * Decimal::from(selection.quantity)),
        });
    }
    Ok(lines)
}

fn resolve_setup_lines(
    request: &VersionRequest,
    snapshot: &ReferenceSnapshot,
) -> Result<Vec<SetupLineItem>, EngineError> {
    let mut lines = Vec::with_capacity(request.setup.len());
    for selection in &request.setup {
        let sku = snapshot.sku(&selection.sku_id).ok_or_else(|| {
            EngineError::UnknownReference { kind: ReferenceKind::Sku, id: selection.sku_id.0.clone() }
        })?;

        let unit_price = match &sku.price {
            SkuPrice::Fixed(price) => *price,
            SkuPrice::Tiered(table) => {
                tiers::resolve_unit_price(&sku.code, table, selection.quantity)?
            }
        };
        lines.push(SetupLineItem {
            sku_id: selection.sku_id.clone(),
            quantity: selection.quantity,
            unit_price,
            total_price: round_currency(unit_price * Decimal::from(selection.quantity)),
            sequence_order: selection.sequence_order,
        });
    }
    Ok(lines)
}
