use serde::{Deserialize, Serialize};

use crate::entities::{find_tier, Booking, Coordinates, FareQuote};
use crate::error::{
    incomplete_selection_error, invalid_invocation_error, invalid_tier_error, Error,
};
use crate::fare;
use crate::geo;

/// The booking flow for one interactive session. Pure state machine: all
/// transitions are synchronous and side-effect free, collaborators are driven
/// by the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub status: Status,
    pub selecting: Endpoint,
    pub pickup: Option<Coordinates>,
    pub destination: Option<Coordinates>,
    pub tier_id: Option<String>,
    pub booking: Option<Booking>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    SelectingLocations,
    TierChosen,
    Confirmed,
    StatusTracking,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::SelectingLocations => "selecting_locations".into(),
            Self::TierChosen => "tier_chosen".into(),
            Self::Confirmed => "confirmed".into(),
            Self::StatusTracking => "status_tracking".into(),
        }
    }
}

/// Which endpoint the next map selection sets. A sub-mode of location
/// selection; it never gates any transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Pickup,
    Destination,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            status: Status::SelectingLocations,
            selecting: Endpoint::Pickup,
            pickup: None,
            destination: None,
            tier_id: None,
            booking: None,
        }
    }

    pub fn set_selecting(&mut self, which: Endpoint) {
        self.selecting = which;
    }

    /// Overwrites the pickup or destination wholesale. Legal until a booking
    /// is confirmed.
    #[tracing::instrument]
    pub fn set_point(&mut self, which: Endpoint, location: Coordinates) -> Result<(), Error> {
        match self.status {
            Status::SelectingLocations | Status::TierChosen => {
                match which {
                    Endpoint::Pickup => self.pickup = Some(location),
                    Endpoint::Destination => self.destination = Some(location),
                }

                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    /// Records a catalog tier. Rejects unknown ids, keeping any prior
    /// selection. Legal until a booking is confirmed.
    #[tracing::instrument]
    pub fn select_tier(&mut self, tier_id: &str) -> Result<(), Error> {
        match self.status {
            Status::SelectingLocations | Status::TierChosen => {
                let tier = find_tier(tier_id).ok_or_else(invalid_tier_error)?;

                self.tier_id = Some(tier.id.into());
                self.status = Status::TierChosen;

                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    /// Fare estimate derived from the current pickup, destination and tier.
    /// None until all three are set.
    pub fn quote(&self) -> Option<FareQuote> {
        let pickup = self.pickup.as_ref()?;
        let destination = self.destination.as_ref()?;
        let tier = find_tier(self.tier_id.as_deref()?)?;

        Some(fare::quote(geo::haversine_km(pickup, destination), tier))
    }

    /// Freezes a booking from the live quote. Identical pickup and
    /// destination are legal and yield the minimum fare and ETA.
    #[tracing::instrument]
    pub fn confirm(&mut self, id: String) -> Result<Booking, Error> {
        match self.status {
            Status::SelectingLocations | Status::TierChosen => {}
            _ => return Err(invalid_invocation_error()),
        }

        let (pickup, destination) = match (&self.pickup, &self.destination) {
            (Some(pickup), Some(destination)) => (pickup, destination),
            _ => return Err(incomplete_selection_error()),
        };

        let tier = self
            .tier_id
            .as_deref()
            .and_then(find_tier)
            .ok_or_else(incomplete_selection_error)?;

        let distance_km = geo::haversine_km(pickup, destination);
        let quote = fare::quote(distance_km, tier);
        let eta_minutes = fare::estimate_eta(distance_km, tier);

        let booking = Booking::new(id, tier.name.into(), quote.fare, eta_minutes, distance_km);

        self.booking = Some(booking.clone());
        self.status = Status::Confirmed;

        Ok(booking)
    }

    #[tracing::instrument]
    pub fn view_status(&mut self) -> Result<Booking, Error> {
        match self.status {
            Status::Confirmed => {
                let booking = self.booking.clone().ok_or_else(invalid_invocation_error)?;
                self.status = Status::StatusTracking;

                Ok(booking)
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    /// Discards the booking and clears every selection. The only reset path,
    /// reachable from both the confirmation and the status view.
    #[tracing::instrument]
    pub fn close(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Confirmed | Status::StatusTracking => {
                self.booking = None;
                self.pickup = None;
                self.destination = None;
                self.tier_id = None;
                self.selecting = Endpoint::Pickup;
                self.status = Status::SelectingLocations;

                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    fn coords(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates::new(latitude, longitude).unwrap()
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session
            .set_point(Endpoint::Pickup, coords(12.9757, 77.6011))
            .unwrap();
        session
            .set_point(Endpoint::Destination, coords(13.1986, 77.7066))
            .unwrap();
        session.select_tier("standard").unwrap();
        session
    }

    #[test]
    fn selecting_tier_moves_to_tier_chosen() {
        let mut session = Session::new();
        assert_eq!(session.status, Status::SelectingLocations);

        session.select_tier("premium").unwrap();
        assert_eq!(session.status, Status::TierChosen);

        // locations may still be changed afterwards
        session
            .set_point(Endpoint::Pickup, coords(0.0, 0.0))
            .unwrap();
        assert_eq!(session.status, Status::TierChosen);
    }

    #[test]
    fn unknown_tier_is_rejected_and_prior_selection_kept() {
        let mut session = Session::new();
        session.select_tier("premium").unwrap();

        let err = session.select_tier("helicopter").unwrap_err();

        assert_eq!(err.code, error::INVALID_TIER);
        assert_eq!(session.tier_id.as_deref(), Some("premium"));
        assert_eq!(session.status, Status::TierChosen);
    }

    #[test]
    fn quote_requires_all_inputs() {
        let mut session = Session::new();
        assert!(session.quote().is_none());

        session
            .set_point(Endpoint::Pickup, coords(12.9757, 77.6011))
            .unwrap();
        session
            .set_point(Endpoint::Destination, coords(13.1986, 77.7066))
            .unwrap();
        assert!(session.quote().is_none());

        session.select_tier("standard").unwrap();
        let quote = session.quote().unwrap();
        assert!(quote.distance_km > 0.0);
        assert_eq!(quote.fare, 100.0 + quote.distance_km * 50.0);
    }

    #[test]
    fn confirm_without_tier_fails_and_leaves_state_unchanged() {
        let mut session = Session::new();
        session
            .set_point(Endpoint::Pickup, coords(12.9757, 77.6011))
            .unwrap();
        session
            .set_point(Endpoint::Destination, coords(13.1986, 77.7066))
            .unwrap();

        let err = session.confirm("FT00000001".into()).unwrap_err();

        assert_eq!(err.code, error::INCOMPLETE_SELECTION);
        assert_eq!(session.status, Status::SelectingLocations);
        assert!(session.booking.is_none());
    }

    #[test]
    fn confirm_without_destination_fails() {
        let mut session = Session::new();
        session
            .set_point(Endpoint::Pickup, coords(12.9757, 77.6011))
            .unwrap();
        session.select_tier("express").unwrap();

        let err = session.confirm("FT00000001".into()).unwrap_err();

        assert_eq!(err.code, error::INCOMPLETE_SELECTION);
        assert_eq!(session.status, Status::TierChosen);
    }

    #[test]
    fn confirm_freezes_booking() {
        let mut session = ready_session();
        let booking = session.confirm("FT00000001".into()).unwrap();

        assert_eq!(session.status, Status::Confirmed);
        assert_eq!(booking.id, "FT00000001");
        assert_eq!(booking.tier_name, "Standard");
        assert_eq!(booking.fare, 100.0 + booking.distance_km * 50.0);
        assert!(booking.eta_minutes > 5);

        // no mutation path exists after confirmation
        assert!(session
            .set_point(Endpoint::Pickup, coords(0.0, 0.0))
            .is_err());
        assert!(session.select_tier("express").is_err());
        assert!(session.confirm("FT00000002".into()).is_err());

        let frozen = session.booking.as_ref().unwrap();
        assert_eq!(frozen.fare, booking.fare);
        assert_eq!(frozen.distance_km, booking.distance_km);
    }

    #[test]
    fn identical_endpoints_yield_minimum_fare_and_eta() {
        let mut session = Session::new();
        let point = coords(12.9757, 77.6011);
        session.set_point(Endpoint::Pickup, point.clone()).unwrap();
        session.set_point(Endpoint::Destination, point).unwrap();
        session.select_tier("express").unwrap();

        let booking = session.confirm("FT00000001".into()).unwrap();

        assert_eq!(booking.distance_km, 0.0);
        assert_eq!(booking.fare, 200.0);
        assert_eq!(booking.eta_minutes, 5);
    }

    #[test]
    fn view_status_only_from_confirmed() {
        let mut session = ready_session();
        assert!(session.view_status().is_err());

        session.confirm("FT00000001".into()).unwrap();
        let booking = session.view_status().unwrap();

        assert_eq!(session.status, Status::StatusTracking);
        assert_eq!(booking.id, "FT00000001");

        // not legal a second time
        assert!(session.view_status().is_err());
    }

    #[test]
    fn close_resets_from_confirmed() {
        let mut session = ready_session();
        session.set_selecting(Endpoint::Destination);
        session.confirm("FT00000001".into()).unwrap();

        session.close().unwrap();

        assert_eq!(session.status, Status::SelectingLocations);
        assert_eq!(session.selecting, Endpoint::Pickup);
        assert!(session.pickup.is_none());
        assert!(session.destination.is_none());
        assert!(session.tier_id.is_none());
        assert!(session.booking.is_none());
    }

    #[test]
    fn close_resets_from_status_tracking() {
        let mut session = ready_session();
        session.confirm("FT00000001".into()).unwrap();
        session.view_status().unwrap();

        session.close().unwrap();

        assert_eq!(session.status, Status::SelectingLocations);
        assert!(session.pickup.is_none());
        assert!(session.destination.is_none());
        assert!(session.tier_id.is_none());
        assert!(session.booking.is_none());
    }

    #[test]
    fn close_illegal_while_selecting() {
        let mut session = Session::new();
        let err = session.close().unwrap_err();

        assert_eq!(err.code, error::INVALID_INVOCATION);
    }
}
