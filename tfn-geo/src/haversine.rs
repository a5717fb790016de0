//! Great-circle distance on a spherical Earth model.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers to statute miles.
pub const KM_TO_MILES: f64 = 0.621371;

/// Great-circle distance in kilometers between two points given in decimal
/// degrees.
///
/// Cosine form of the haversine formula over a sphere of radius
/// [`EARTH_RADIUS_KM`]. The intermediate term is clamped at zero before the
/// square root: for identical or near-identical points, cancellation can
/// push it a few ulps negative, and the clamp keeps `sqrt` off that NaN
/// path. Defined for all latitudes in [-90, 90] and longitudes in
/// [-180, 180]; NaN inputs propagate to a NaN result.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let p = std::f64::consts::PI / 180.0;
    let a = 0.5 - ((lat2 - lat1) * p).cos() / 2.0
        + (lat1 * p).cos() * (lat2 * p).cos() * (1.0 - ((lon2 - lon1) * p).cos()) / 2.0;
    2.0 * EARTH_RADIUS_KM * a.max(0.0).sqrt().asin()
}

/// Convert kilometers to statute miles.
pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

#[cfg(test)]
mod tests {
    use super::{distance_km, km_to_miles, EARTH_RADIUS_KM};

    // Downtown coordinates for three upstate NY cities.
    const ALBANY: (f64, f64) = (42.6526, -73.7562);
    const SYRACUSE: (f64, f64) = (43.0481, -76.1474);
    const BUFFALO: (f64, f64) = (42.8864, -78.8784);

    #[test]
    fn distance_to_self_is_zero() {
        let d = distance_km(ALBANY.0, ALBANY.1, ALBANY.0, ALBANY.1);
        assert!(d.abs() < 1e-9, "self distance was {}", d);
        assert!(!d.is_nan());
    }

    #[test]
    fn near_identical_points_do_not_produce_nan() {
        // Close enough that the haversine term can cancel below zero.
        let d = distance_km(42.65260000001, -73.7562, 42.6526, -73.75620000001);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = distance_km(ALBANY.0, ALBANY.1, BUFFALO.0, BUFFALO.1);
        let ba = distance_km(BUFFALO.0, BUFFALO.1, ALBANY.0, ALBANY.1);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn triangle_inequality_holds() {
        let ab = distance_km(ALBANY.0, ALBANY.1, SYRACUSE.0, SYRACUSE.1);
        let bc = distance_km(SYRACUSE.0, SYRACUSE.1, BUFFALO.0, BUFFALO.1);
        let ac = distance_km(ALBANY.0, ALBANY.1, BUFFALO.0, BUFFALO.1);
        assert!(ac <= ab + bc + 1e-9);
    }

    #[test]
    fn albany_to_syracuse_is_about_200_km() {
        let d = distance_km(ALBANY.0, ALBANY.1, SYRACUSE.0, SYRACUSE.1);
        assert!((190.0..210.0).contains(&d), "got {} km", d);
    }

    #[test]
    fn antipodal_points_measure_half_the_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn km_to_miles_conversion() {
        assert!((km_to_miles(100.0) - 62.1371).abs() < 1e-9);
        assert_eq!(km_to_miles(0.0), 0.0);
    }
}
