use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// One quantity band inside a pricing table. `max_quantity` of `None`
/// marks the band as open-ended, which is only legal on the highest tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub min_quantity: u32,
    pub max_quantity: Option<u32>,
    pub unit_price: Decimal,
}

/// Up to three ordered, contiguous quantity tiers. Contiguity is
/// re-checked at resolution time so stale reference data is caught even
/// when it slipped past data entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPricingTable {
    pub tiers: Vec<PricingTier>,
}

impl ProductPricingTable {
    pub fn single_tier(unit_price: Decimal) -> Self {
        Self { tiers: vec![PricingTier { min_quantity: 1, max_quantity: None, unit_price }] }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaasProduct {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub pricing: ProductPricingTable,
    pub active: bool,
}
