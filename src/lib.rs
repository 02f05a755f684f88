#![doc = "GeoMatch public API"]
mod coord;
mod distance;
mod matching;

#[doc(inline)]
pub use coord::{
    normalize_collection, normalize_collection_with_rejects, parse_pair, parse_single_axis_value, validate,
    CoordError, GeoCoordinate, IndexedPoint, RawCoordinateInput,
    MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
};

#[doc(inline)]
pub use distance::{geodesic_distance_km, NO_DISTANCE};

#[doc(inline)]
pub use matching::{match_closest_points, match_indexed, MatchRecord};
