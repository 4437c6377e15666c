use crate::entities::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers, using the
/// haversine formula.
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);

    // rounding can push h a hair outside [0, 1] for coincident or antipodal
    // points, which would make the square roots produce NaN
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates::new(latitude, longitude).unwrap()
    }

    #[test]
    fn zero_for_identical_points() {
        let a = coords(12.9757, 77.6011);
        assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = coords(12.9757, 77.6011); // MG Road, Bengaluru
        let b = coords(13.1986, 77.7066); // Kempegowda airport

        assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
    }

    #[test]
    fn city_to_airport_distance() {
        let a = coords(12.9757, 77.6011);
        let b = coords(13.1986, 77.7066);

        let distance = haversine_km(&a, &b);
        // straight-line distance is roughly 27 km
        assert!(distance > 20.0 && distance < 35.0);
    }

    #[test]
    fn no_nan_for_near_identical_points() {
        let a = coords(45.0, 90.0);
        let b = coords(45.0 + 1e-13, 90.0 - 1e-13);

        let distance = haversine_km(&a, &b);
        assert!(!distance.is_nan());
        assert!(distance >= 0.0);
    }

    #[test]
    fn no_nan_for_antipodal_points() {
        let a = coords(0.0, 0.0);
        let b = coords(0.0, 180.0);

        let distance = haversine_km(&a, &b);
        assert!(!distance.is_nan());
        // half the Earth's circumference
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }
}
