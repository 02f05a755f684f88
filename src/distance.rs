use geo::{Distance, Geodesic, Point};

use crate::coord::validate;

/// Returned in place of a distance when one cannot be computed.
/// Larger than any real pairwise distance on Earth.
pub const NO_DISTANCE: f64 = f64::INFINITY;

/// Geodesic distance in kilometers between two `(lat, lon)` pairs on the WGS84 ellipsoid.
///
/// Both inputs are range checked; an out-of-range or non-finite input, or a
/// failed computation, yields [`NO_DISTANCE`] instead of an error. The result
/// is exactly 0 for identical points and independent of argument order.
pub fn geodesic_distance_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    if validate(a.0, a.1).is_err() || validate(b.0, b.1).is_err() {
        return NO_DISTANCE;
    }
    if a == b { return 0.0 }

    // evaluate in a fixed order so that d(a, b) and d(b, a) agree to the bit
    let (from, to) = if a <= b { (a, b) } else { (b, a) };

    let meters = Geodesic.distance(Point::new(from.1, from.0), Point::new(to.1, to.0));
    if meters.is_finite() && meters >= 0.0 { meters / 1000.0 } else { NO_DISTANCE }
}
