use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use geo_types::Point;

use crate::entities::{Booking, Coordinates, Endpoint, FareQuote};
use crate::error::Error;
use crate::tracking::StatusSnapshot;

#[async_trait]
pub trait BookingAPI {
    /// Switches which endpoint the next map selection sets.
    async fn set_selecting(&self, which: Endpoint);

    /// Applies a map selection to the current endpoint and returns the
    /// recomputed fare quote, if one is derivable yet.
    async fn select_point(&self, location: Coordinates) -> Result<Option<FareQuote>, Error>;

    async fn select_tier(&self, tier_id: &str) -> Result<Option<FareQuote>, Error>;

    async fn quote(&self) -> Option<FareQuote>;

    async fn confirm_booking(&self) -> Result<Booking, Error>;

    async fn view_status(&self) -> Result<(), Error>;

    async fn status(&self) -> Result<StatusSnapshot, Error>;

    async fn close(&self) -> Result<(), Error>;
}

pub type DynAPI = Arc<dyn BookingAPI + Send + Sync>;

/// Map surface the engine renders into. Internals (tiles, pins, styling) are
/// the collaborator's concern.
pub trait MapView: Send + Sync {
    fn place_marker(&self, which: Endpoint, position: Point<f64>);
    fn draw_route(&self, origin: Point<f64>, destination: Point<f64>);
    fn clear(&self);
}

/// User-facing notification surface (toast, modal, log line).
pub trait Notifier: Send + Sync {
    fn booking_confirmed(&self, booking: &Booking);
    fn incomplete_selection(&self);
}

pub trait IdGenerator: Send + Sync {
    fn booking_id(&self) -> String;
}

/// Default booking id scheme: a fixed tag plus the low-order digits of the
/// millisecond clock. Unique enough within one interactive session; tests
/// inject a sequential generator instead.
pub struct SystemClockIds;

impl IdGenerator for SystemClockIds {
    fn booking_id(&self) -> String {
        let millis = Utc::now().timestamp_millis().to_string();
        let tail = &millis[millis.len().saturating_sub(8)..];

        format!("FT{tail}")
    }
}
