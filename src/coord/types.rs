use geo::Point;
use thiserror::Error;

/// Valid latitude range, in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range, in decimal degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Reasons a single coordinate value can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("expected two comma-separated values, got {0:?}")]
    InvalidShape(String),

    #[error("not a recognized coordinate notation: {0:?}")]
    UnrecognizedNotation(String),

    #[error("not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("minutes must be in [0, 60), got {0}")]
    MinutesOutOfRange(f64),

    #[error("seconds must be in [0, 60), got {0}")]
    SecondsOutOfRange(f64),

    #[error("latitude {0:.4}° is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0:.4}° is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Range-check a latitude/longitude pair (NaN is always out of range).
pub fn validate(lat: f64, lon: f64) -> Result<(), CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::LatitudeOutOfRange(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::LongitudeOutOfRange(lon));
    }
    Ok(())
}

/// A WGS84 position in decimal degrees, guaranteed to be within range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    lat: f64,
    lon: f64,
}

impl GeoCoordinate {
    /// Construct a coordinate, rejecting out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        validate(lat, lon)?;
        Ok(Self { lat, lon })
    }

    #[inline] pub fn lat(&self) -> f64 { self.lat }

    #[inline] pub fn lon(&self) -> f64 { self.lon }

    /// The coordinate as a `(lat, lon)` tuple.
    #[inline] pub fn as_tuple(&self) -> (f64, f64) { (self.lat, self.lon) }
}

impl From<GeoCoordinate> for Point<f64> {
    fn from(coord: GeoCoordinate) -> Self { Point::new(coord.lon, coord.lat) }
}

/// One element of a caller-supplied coordinate collection, before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCoordinateInput {
    /// Already-numeric `(lat, lon)`.
    NumericPair(f64, f64),
    /// A `"lat,lon"` string of plain decimal degrees.
    Delimited(String),
    /// One textual value per axis, each in any supported notation.
    AxisPair(String, String),
}

impl RawCoordinateInput {
    /// Parse into a `(lat, lon)` tuple without range checking.
    pub fn parse(&self) -> Result<(f64, f64), CoordError> {
        match self {
            Self::NumericPair(lat, lon) => Ok((*lat, *lon)),
            Self::Delimited(text) => super::parse_pair(text),
            Self::AxisPair(lat, lon) => Ok((
                super::parse_single_axis_value(lat)?,
                super::parse_single_axis_value(lon)?,
            )),
        }
    }

    /// Parse and range-check into a [`GeoCoordinate`].
    pub fn normalize(&self) -> Result<GeoCoordinate, CoordError> {
        let (lat, lon) = self.parse()?;
        GeoCoordinate::new(lat, lon)
    }
}

impl From<(f64, f64)> for RawCoordinateInput {
    fn from((lat, lon): (f64, f64)) -> Self { Self::NumericPair(lat, lon) }
}

impl From<&str> for RawCoordinateInput {
    fn from(text: &str) -> Self { Self::Delimited(text.to_owned()) }
}

impl From<String> for RawCoordinateInput {
    fn from(text: String) -> Self { Self::Delimited(text) }
}

impl From<GeoCoordinate> for RawCoordinateInput {
    fn from(coord: GeoCoordinate) -> Self { Self::NumericPair(coord.lat, coord.lon) }
}

/// A normalized coordinate tagged with its 0-based position in the input collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    pub index: usize,
    pub coord: GeoCoordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bounds_inclusive() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(GeoCoordinate::new(91.0, 0.0), Err(CoordError::LatitudeOutOfRange(91.0)));
        assert_eq!(GeoCoordinate::new(0.0, -180.5), Err(CoordError::LongitudeOutOfRange(-180.5)));
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn point_conversion_is_lon_lat() {
        let point: Point<f64> = GeoCoordinate::new(10.0, 20.0).unwrap().into();
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
    }

    #[test]
    fn raw_input_shapes_parse_without_range_check() {
        assert_eq!(RawCoordinateInput::from((95.0, 0.0)).parse(), Ok((95.0, 0.0)));
        assert_eq!(RawCoordinateInput::from(" 10 , 20 ").parse(), Ok((10.0, 20.0)));
        assert_eq!(
            RawCoordinateInput::AxisPair("31.5°".into(), "-74.006".into()).parse(),
            Ok((31.5, -74.006)),
        );
    }

    #[test]
    fn raw_input_normalize_applies_range_check() {
        assert_eq!(
            RawCoordinateInput::from((95.0, 0.0)).normalize(),
            Err(CoordError::LatitudeOutOfRange(95.0)),
        );
        assert_eq!(
            RawCoordinateInput::from("10,200").normalize(),
            Err(CoordError::LongitudeOutOfRange(200.0)),
        );
        assert_eq!(RawCoordinateInput::from("bad").normalize(), Err(CoordError::InvalidShape("bad".into())));
    }
}
