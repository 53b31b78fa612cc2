use rust_decimal::Decimal;

use crate::domain::travel::{TravelEstimate, TravelZone, TripCost, TripPlan};
use crate::money::round_currency;

/// Estimates travel cost from zone baseline rates and the planned trips.
///
/// Travel is optional per quote: no zone or no trips yields a zero total
/// with no line items, and missing trip parameters default to 1 trip-day
/// and 1 person rather than failing.
pub fn estimate(zone: Option<&TravelZone>, trips: &[TripPlan]) -> TravelEstimate {
    let Some(zone) = zone else {
        return TravelEstimate::none();
    };
    if trips.is_empty() {
        return TravelEstimate::none();
    }

    let mut costed = Vec::with_capacity(trips.len());
    let mut total = Decimal::ZERO;

    for trip in trips {
        let days = trip.days.unwrap_or(1);
        let people = trip.people.unwrap_or(1);
        // Arrive the evening before the first on-site day.
        let nights = days + 1;

        let people_dec = Decimal::from(people);
        let nights_dec = Decimal::from(nights);

        let airfare = round_currency(zone.airfare_estimate * people_dec);
        let hotel = round_currency(zone.hotel_rate * people_dec * nights_dec);
        let per_diem = round_currency(zone.per_diem_rate * people_dec * nights_dec);
        let vehicle = round_currency(zone.vehicle_rate * nights_dec);
        let trip_total = airfare + hotel + per_diem + vehicle;
        total += trip_total;

        costed.push(TripCost {
            days,
            nights,
            people,
            airfare,
            hotel,
            per_diem,
            vehicle,
            total: trip_total,
        });
    }

    TravelEstimate { zone_name: Some(zone.name.clone()), trips: costed, total }
}
