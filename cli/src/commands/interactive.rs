use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use geomatch::{
    match_closest_points, normalize_collection, parse_single_axis_value, validate, CoordError, GeoCoordinate,
    RawCoordinateInput,
};

use crate::cli::Cli;
use crate::report::write_matches;

const PRIMARY: &str = "Primary Array (Array 1)";
const SECONDARY: &str = "Secondary Array (Array 2)";

/// Print a prompt and read one trimmed line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read from input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Parse one axis value and range check it on its own axis.
fn read_lat(text: &str) -> Result<f64, CoordError> {
    let lat = parse_single_axis_value(text)?;
    validate(lat, 0.0).map(|_| lat)
}

fn read_lon(text: &str) -> Result<f64, CoordError> {
    let lon = parse_single_axis_value(text)?;
    validate(0.0, lon).map(|_| lon)
}

/// Collect coordinates one latitude/longitude at a time until the user types
/// `done` (any case) for the latitude, or the input ends. Invalid values are
/// reported and the same point is asked for again.
pub fn prompt_collection<R: BufRead, W: Write>(name: &str, input: &mut R, out: &mut W) -> Result<Vec<GeoCoordinate>> {
    writeln!(out, "\n--- Enter coordinates for {name} ---")?;
    writeln!(out, "For each point, enter Latitude, then Longitude.")?;
    writeln!(out, "Supported formats for a single value (lat or lon):")?;
    writeln!(out, "  - DMS: e.g., 31°13'27\"N  or  121d 28m 15s E")?;
    writeln!(out, "  - DD with symbol: e.g., 31.2242°")?;
    writeln!(out, "  - DD (plain number): e.g., +31.2242 or -74.006")?;
    writeln!(out, "Type 'done' (for Latitude) to finish this array.")?;

    let mut coordinates = Vec::new();
    loop {
        let n = coordinates.len() + 1;
        writeln!(out, "\n-- Point {n} for {name} --")?;

        let Some(lat_text) = prompt(input, out, &format!("Enter Latitude for Point {n} (or 'done'): "))? else { break };
        if lat_text.eq_ignore_ascii_case("done") { break }

        let Some(lon_text) = prompt(input, out, &format!("Enter Longitude for Point {n}: "))? else { break };

        match (read_lat(&lat_text), read_lon(&lon_text)) {
            (Ok(lat), Ok(lon)) => {
                let coord = GeoCoordinate::new(lat, lon)?;
                writeln!(out, "  Added Point {n}: ({lat:.4}, {lon:.4})")?;
                coordinates.push(coord);
            }
            (lat, lon) => {
                if let Err(err) = lat {
                    writeln!(out, "  Error: Latitude '{lat_text}': {err}. Try Point {n} again.")?;
                }
                if let Err(err) = lon {
                    writeln!(out, "  Error: Longitude '{lon_text}': {err}. Try Point {n} again.")?;
                }
            }
        }
    }

    if coordinates.is_empty() { writeln!(out, "Info: {name} is empty.")? }
    Ok(coordinates)
}

/// Run a full prompt-and-match session over the given input and output.
pub fn session<R: BufRead, W: Write>(input: &mut R, out: &mut W, verbose: u8) -> Result<()> {
    writeln!(out, "=== Interactive Geo Location Matcher ===")?;

    let primary = prompt_collection(PRIMARY, input, out)?;
    let secondary = prompt_collection(SECONDARY, input, out)?;

    if primary.is_empty() || secondary.is_empty() {
        writeln!(out, "\nOne or both coordinate arrays are empty. Cannot perform matching.")?;
    } else {
        let sources = primary.iter().copied().map(RawCoordinateInput::from).collect::<Vec<_>>();
        let targets = secondary.iter().copied().map(RawCoordinateInput::from).collect::<Vec<_>>();

        if verbose > 0 { eprintln!("[match] {} x {} points", sources.len(), targets.len()); }
        let records = match_closest_points(&sources, &targets);

        if records.is_empty() {
            writeln!(out, "\nNo valid matches found.")?;
        } else {
            writeln!(out, "\n--- Match Results ---")?;
            write_matches(out, &records,
                (PRIMARY, &normalize_collection(&sources)),
                (SECONDARY, &normalize_collection(&targets)),
                2,
            )?;
        }
    }

    writeln!(out, "\n=== Program Finished ===")?;
    Ok(())
}

pub fn run(cli: &Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session(&mut stdin.lock(), &mut stdout.lock(), cli.verbose)
}
