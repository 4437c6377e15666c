use serde::{Deserialize, Serialize};

/// Derived fare estimate. Recomputed from the live pickup, destination and
/// tier on every read; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub distance_km: f64,
    pub fare: f64,
}
