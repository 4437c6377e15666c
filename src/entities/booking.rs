use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmed-ride snapshot, frozen from the live quote at confirmation.
/// Immutable after creation; at most one exists per session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub tier_name: String,
    pub fare: f64,
    pub eta_minutes: u32,
    pub distance_km: f64,
    pub requested_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        id: String,
        tier_name: String,
        fare: f64,
        eta_minutes: u32,
        distance_km: f64,
    ) -> Self {
        Self {
            id,
            tier_name,
            fare,
            eta_minutes,
            distance_km,
            requested_at: Utc::now(),
        }
    }
}
