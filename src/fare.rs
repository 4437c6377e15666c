use crate::entities::{FareQuote, Tier};

pub const BASE_FARE: f64 = 100.0;
pub const PER_KM_RATE: f64 = 50.0;
pub const DISPATCH_DELAY_MINUTES: u32 = 5;

/// Fare for a ride of the given distance on the given tier. A distance of 0
/// still pays the base fare scaled by the tier multiplier.
pub fn quote(distance_km: f64, tier: &Tier) -> FareQuote {
    FareQuote {
        distance_km,
        fare: (BASE_FARE + distance_km * PER_KM_RATE) * tier.multiplier,
    }
}

/// Minutes until arrival: flight time at the tier's cruising speed, rounded
/// up, plus a fixed dispatch delay. Never below the dispatch delay itself.
pub fn estimate_eta(distance_km: f64, tier: &Tier) -> u32 {
    let flight_minutes = (distance_km / tier.speed_kmh * 60.0).ceil() as u32;

    flight_minutes + DISPATCH_DELAY_MINUTES
}
