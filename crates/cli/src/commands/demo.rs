use quotemill_core::{
    calculate_version, DiscountConfiguration, EscalationModel, MilestoneTerms, PricingTier,
    ProductId, ProductPricingTable, ReferenceSnapshot, Referrer, ReferrerId, ReferralTerms,
    SaasProduct, SaasSelection, SetupSelection, SkuDefinition, SkuId, SkuPrice, TravelPlan,
    TravelZone, TravelZoneId, TripPlan, VersionNumber, VersionRequest,
};
use rust_decimal::Decimal;

use crate::commands::CommandResult;

/// Prices a built-in sample quote end to end. Useful as a smoke check and
/// as a reference for the input file layout.
pub fn run() -> CommandResult {
    let snapshot = demo_snapshot();
    let request = demo_request();

    let version = match calculate_version(&request, &snapshot, VersionNumber::first()) {
        Ok(version) => version,
        Err(error) => {
            return CommandResult::failure("demo", error.class(), error.to_string(), 3);
        }
    };

    let message = format!(
        "demo quote priced over {} years: SaaS monthly {}, setup {}, travel {}, contracted {}",
        version.projection_years,
        version.totals.saas_monthly,
        version.totals.setup,
        version.totals.travel,
        version.totals.contracted
    );
    match serde_json::to_value(&version) {
        Ok(data) => CommandResult::success_with_data("demo", message, data),
        Err(error) => CommandResult::failure(
            "demo",
            "serialization",
            format!("could not serialize the computed version: {error}"),
            3,
        ),
    }
}

fn demo_snapshot() -> ReferenceSnapshot {
    ReferenceSnapshot {
        products: vec![SaasProduct {
            id: ProductId("saas-platform".to_string()),
            code: "SAAS-PLATFORM".to_string(),
            name: "Platform Subscription".to_string(),
            pricing: ProductPricingTable {
                tiers: vec![
                    PricingTier {
                        min_quantity: 1,
                        max_quantity: Some(10),
                        unit_price: Decimal::new(5000, 2),
                    },
                    PricingTier {
                        min_quantity: 11,
                        max_quantity: Some(50),
                        unit_price: Decimal::new(4000, 2),
                    },
                    PricingTier {
                        min_quantity: 51,
                        max_quantity: None,
                        unit_price: Decimal::new(3000, 2),
                    },
                ],
            },
            active: true,
        }],
        skus: vec![SkuDefinition {
            id: SkuId("setup-implementation".to_string()),
            code: "SETUP-IMPL".to_string(),
            name: "Implementation Package".to_string(),
            price: SkuPrice::Fixed(Decimal::new(1_000_000, 2)),
            active: true,
        }],
        zones: vec![TravelZone {
            id: TravelZoneId("zone-domestic".to_string()),
            code: "ZONE-DOM".to_string(),
            name: "Domestic".to_string(),
            airfare_estimate: Decimal::new(50_000, 2),
            hotel_rate: Decimal::new(15_000, 2),
            per_diem_rate: Decimal::new(6_000, 2),
            vehicle_rate: Decimal::new(8_000, 2),
            active: true,
        }],
        referrers: vec![Referrer {
            id: ReferrerId("ref-partner".to_string()),
            name: "Partner Network".to_string(),
            default_rate: Decimal::new(5, 2),
            active: true,
        }],
    }
}

fn demo_request() -> VersionRequest {
    VersionRequest {
        description: Some("demo pricing run".to_string()),
        saas: vec![SaasSelection {
            product_id: ProductId("saas-platform".to_string()),
            quantity: 25,
        }],
        setup: vec![SetupSelection {
            sku_id: SkuId("setup-implementation".to_string()),
            quantity: 1,
            sequence_order: Some(1),
        }],
        discounts: DiscountConfiguration {
            saas_all_years: Some(Decimal::new(10, 2)),
            setup_percent: Some(Decimal::new(10, 2)),
            ..DiscountConfiguration::default()
        },
        escalation: EscalationModel::FixedPercent { annual_rate: Decimal::new(10, 2) },
        projection_years: 3,
        level_loading: true,
        teller_payments: false,
        referral: ReferralTerms {
            referrer_id: Some(ReferrerId("ref-partner".to_string())),
            rate_override: None,
        },
        travel: TravelPlan {
            zone_id: Some(TravelZoneId("zone-domestic".to_string())),
            trips: vec![TripPlan { days: Some(3), people: Some(2) }],
        },
        milestones: MilestoneTerms::default(),
    }
}
