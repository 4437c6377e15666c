use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::{BookingAPI, IdGenerator, MapView, Notifier};
use crate::entities::{Booking, Coordinates, Endpoint, FareQuote, Session};
use crate::error::{invalid_invocation_error, Error, INCOMPLETE_SELECTION};
use crate::tracking::{StatusSnapshot, StatusTracker};

/// Orchestrates the booking session: applies transitions to the [`Session`]
/// entity, drives the map and notification collaborators, and owns the
/// status-countdown task while the status view is open.
pub struct Engine {
    session: Mutex<Session>,
    tracker: Mutex<Option<StatusTracker>>,
    map: Box<dyn MapView>,
    notifier: Box<dyn Notifier>,
    ids: Box<dyn IdGenerator>,
}

impl Engine {
    pub fn new(
        map: Box<dyn MapView>,
        notifier: Box<dyn Notifier>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            session: Mutex::new(Session::new()),
            tracker: Mutex::new(None),
            map,
            notifier,
            ids,
        }
    }
}

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn set_selecting(&self, which: Endpoint) {
        self.session.lock().await.set_selecting(which);
    }

    #[tracing::instrument(skip(self))]
    async fn select_point(&self, location: Coordinates) -> Result<Option<FareQuote>, Error> {
        let mut session = self.session.lock().await;

        let which = session.selecting;
        session.set_point(which, location.clone())?;

        self.map.place_marker(which, location.into());
        if let (Some(pickup), Some(destination)) = (&session.pickup, &session.destination) {
            self.map
                .draw_route(pickup.clone().into(), destination.clone().into());
        }

        Ok(session.quote())
    }

    #[tracing::instrument(skip(self))]
    async fn select_tier(&self, tier_id: &str) -> Result<Option<FareQuote>, Error> {
        let mut session = self.session.lock().await;

        session.select_tier(tier_id)?;

        Ok(session.quote())
    }

    #[tracing::instrument(skip(self))]
    async fn quote(&self) -> Option<FareQuote> {
        self.session.lock().await.quote()
    }

    #[tracing::instrument(skip(self))]
    async fn confirm_booking(&self) -> Result<Booking, Error> {
        let mut session = self.session.lock().await;

        match session.confirm(self.ids.booking_id()) {
            Ok(booking) => {
                self.notifier.booking_confirmed(&booking);

                Ok(booking)
            }
            Err(err) => {
                if err.code == INCOMPLETE_SELECTION {
                    self.notifier.incomplete_selection();
                }

                Err(err)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn view_status(&self) -> Result<(), Error> {
        let mut session = self.session.lock().await;

        let booking = session.view_status()?;
        *self.tracker.lock().await = Some(StatusTracker::start(booking.eta_minutes));

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn status(&self) -> Result<StatusSnapshot, Error> {
        let tracker = self.tracker.lock().await;

        match tracker.as_ref() {
            Some(tracker) => Ok(tracker.snapshot().await),
            None => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn close(&self) -> Result<(), Error> {
        let mut session = self.session.lock().await;

        session.close()?;

        // dropping the tracker stops the tick task before it can fire again
        self.tracker.lock().await.take();
        self.map.clear();

        Ok(())
    }
}
