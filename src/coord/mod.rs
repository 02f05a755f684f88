//! Coordinate normalization.
//!
//! Turns heterogeneous coordinate representations (numeric pairs, `"lat,lon"`
//! strings, or one textual value per axis in DMS / degree-marked / plain
//! decimal notation) into range-checked [`GeoCoordinate`]s.

mod normalize;
mod parse;
mod types;

pub use normalize::{normalize_collection, normalize_collection_with_rejects};
pub use parse::{parse_pair, parse_single_axis_value};
pub use types::{validate, CoordError, GeoCoordinate, IndexedPoint, RawCoordinateInput, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
