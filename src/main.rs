use geo_types::Point;

use skytaxi::api::{BookingAPI, MapView, Notifier, SystemClockIds};
use skytaxi::engine::Engine;
use skytaxi::entities::{catalog, Booking, Coordinates, Endpoint};

struct LogMap;

impl MapView for LogMap {
    fn place_marker(&self, which: Endpoint, position: Point<f64>) {
        tracing::info!(?which, lat = position.y(), lng = position.x(), "marker placed");
    }

    fn draw_route(&self, origin: Point<f64>, destination: Point<f64>) {
        tracing::info!(
            from = ?(origin.y(), origin.x()),
            to = ?(destination.y(), destination.x()),
            "route drawn"
        );
    }

    fn clear(&self) {
        tracing::info!("map cleared");
    }
}

struct LogNotifier;

impl Notifier for LogNotifier {
    fn booking_confirmed(&self, booking: &Booking) {
        tracing::info!(id = %booking.id, fare = booking.fare, "booking confirmed");
    }

    fn incomplete_selection(&self) {
        tracing::warn!("please select pickup, destination and taxi tier");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let engine = Engine::new(
        Box::new(LogMap),
        Box::new(LogNotifier),
        Box::new(SystemClockIds),
    );

    for tier in catalog() {
        tracing::info!(
            id = tier.id,
            multiplier = tier.multiplier,
            seats = tier.capacity_seats,
            speed_kmh = tier.speed_kmh,
            "{}: {}",
            tier.name,
            tier.description
        );
    }

    // scripted ride: MG Road to Kempegowda airport, Bengaluru
    engine.set_selecting(Endpoint::Pickup).await;
    engine
        .select_point(Coordinates::new(12.9757, 77.6011).unwrap())
        .await
        .unwrap();

    engine.set_selecting(Endpoint::Destination).await;
    engine
        .select_point(Coordinates::new(13.1986, 77.7066).unwrap())
        .await
        .unwrap();

    let quote = engine
        .select_tier("premium")
        .await
        .unwrap()
        .expect("quote should be derivable once everything is selected");
    tracing::info!(
        distance_km = quote.distance_km,
        fare = quote.fare,
        "fare estimate"
    );

    let booking = engine.confirm_booking().await.unwrap();
    println!("{}", serde_json::to_string_pretty(&booking).unwrap());

    engine.view_status().await.unwrap();
    let status = engine.status().await.unwrap();
    tracing::info!(
        phase = %status.phase.name(),
        minutes_remaining = status.time_remaining,
        "live status"
    );

    engine.close().await.unwrap();
}
