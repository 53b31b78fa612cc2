use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelZoneId(pub String);

/// Per-trip baseline rates for a travel region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelZone {
    pub id: TravelZoneId,
    pub code: String,
    pub name: String,
    pub airfare_estimate: Decimal,
    pub hotel_rate: Decimal,
    pub per_diem_rate: Decimal,
    pub vehicle_rate: Decimal,
    pub active: bool,
}

/// A single planned on-site trip. Missing fields default to 1 rather than
/// failing, since travel is optional per quote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
    pub days: Option<u32>,
    pub people: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub zone_id: Option<TravelZoneId>,
    #[serde(default)]
    pub trips: Vec<TripPlan>,
}

/// Cost breakdown for one trip. Nights = days + 1 (arrive the evening
/// before the first on-site day).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripCost {
    pub days: u32,
    pub nights: u32,
    pub people: u32,
    pub airfare: Decimal,
    pub hotel: Decimal,
    pub per_diem: Decimal,
    pub vehicle: Decimal,
    pub total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEstimate {
    pub zone_name: Option<String>,
    pub trips: Vec<TripCost>,
    pub total: Decimal,
}

impl TravelEstimate {
    pub fn none() -> Self {
        Self { zone_name: None, trips: Vec::new(), total: Decimal::ZERO }
    }
}

impl Default for TravelEstimate {
    fn default() -> Self {
        Self::none()
    }
}
