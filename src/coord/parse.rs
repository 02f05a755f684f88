use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::CoordError;

/// Degrees, minutes, optional seconds, optional hemisphere, e.g. `31°13'27"N`, `121d 28m 15s E`.
/// A letter `s` attached to the seconds is the seconds mark; a spaced `S` is the hemisphere.
static DMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)^\s*([0-9]{1,3})\s*[°ºd:\s]\s*"#,
        r#"([0-9]{1,2})\s*['′’m:\s]\s*"#,
        r#"(?:([0-9]{1,2}(?:\.[0-9]+)?)(?:\s*(?:["″”]|''|′′)|s)?)?"#,
        r#"\s*([nsew])?\s*$"#,
    )).expect("DMS pattern is valid")
});

/// Signed decimal degrees followed by a degree mark, e.g. `31.2242°`.
static DD_MARKED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?[0-9]+(?:\.[0-9]+)?)\s*[°º]\s*$").expect("degree-mark pattern is valid")
});

fn parse_number(text: &str) -> Result<f64, CoordError> {
    text.trim().parse::<f64>().map_err(|_| CoordError::InvalidNumber(text.to_owned()))
}

/// Parse a `"lat,lon"` string of plain decimal degrees. No range checking is done here.
pub fn parse_pair(text: &str) -> Result<(f64, f64), CoordError> {
    let parts = text.split(',').collect::<Vec<_>>();
    let [lat, lon] = parts.as_slice() else {
        return Err(CoordError::InvalidShape(text.to_owned()));
    };
    Ok((parse_number(lat)?, parse_number(lon)?))
}

/// Convert the captures of a [`DMS`] match to decimal degrees.
fn dms_to_decimal(caps: &Captures) -> Result<f64, CoordError> {
    let degrees = parse_number(&caps[1])?;
    let minutes = parse_number(&caps[2])?;
    let seconds = caps.get(3).map(|m| parse_number(m.as_str())).transpose()?.unwrap_or(0.0);

    if !(0.0..60.0).contains(&minutes) { return Err(CoordError::MinutesOutOfRange(minutes)) }
    if !(0.0..60.0).contains(&seconds) { return Err(CoordError::SecondsOutOfRange(seconds)) }

    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    match caps.get(4).map(|m| m.as_str().to_ascii_uppercase()).as_deref() {
        Some("S") | Some("W") => Ok(-value),
        _ => Ok(value),
    }
}

/// Parse a single latitude or longitude value to decimal degrees.
///
/// Notations are tried in order: DMS, decimal degrees with a trailing degree
/// mark, then plain decimal degrees. The first notation whose pattern matches
/// decides the outcome; a DMS string with minutes or seconds outside `[0, 60)`
/// is an error and is not retried as another notation. The result is not
/// range checked, so `"999 0 0"` parses to `999.0`.
pub fn parse_single_axis_value(text: &str) -> Result<f64, CoordError> {
    let text = text.trim();

    if let Some(caps) = DMS.captures(text) {
        return dms_to_decimal(&caps);
    }

    if let Some(caps) = DD_MARKED.captures(text) {
        return parse_number(&caps[1]);
    }

    text.parse::<f64>().map_err(|_| CoordError::UnrecognizedNotation(text.to_owned()))
}
