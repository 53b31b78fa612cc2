use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::ProductPricingTable;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkuId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkuPrice {
    Fixed(Decimal),
    Tiered(ProductPricingTable),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuDefinition {
    pub id: SkuId,
    pub code: String,
    pub name: String,
    pub price: SkuPrice,
    pub active: bool,
}
