use std::{fs::File, io::{BufRead, BufReader, Write}, path::Path};

use anyhow::{Context, Result};
use geomatch::{match_indexed, normalize_collection_with_rejects, IndexedPoint, RawCoordinateInput};

use crate::cli::{Cli, MatchArgs};
use crate::report::write_matches;

/// Read one coordinate per line. Blank lines and `#` comments are skipped.
/// A line with exactly one comma is split into per-axis values; any other
/// line is kept whole and left for the normalizer to reject.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<RawCoordinateInput>> {
    let mut points = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue }

        points.push(match line.split_once(',') {
            Some((lat, lon)) if !lon.contains(',') => RawCoordinateInput::AxisPair(lat.to_owned(), lon.to_owned()),
            _ => RawCoordinateInput::Delimited(line.to_owned()),
        });
    }
    Ok(points)
}

/// Read and normalize one input file, reporting dropped entries on stderr.
fn load(path: &Path, label: &str, verbose: u8) -> Result<Vec<IndexedPoint>> {
    if verbose > 0 { eprintln!("[read] {label} <- {}", path.display()); }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let inputs = read_points(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (points, rejects) = normalize_collection_with_rejects(&inputs);
    if verbose > 0 { eprintln!("[normalize] {label}: {} of {} entries valid", points.len(), inputs.len()); }
    if verbose > 1 {
        for (index, err) in &rejects { eprintln!("[reject] {label} entry {index}: {err}"); }
    }

    Ok(points)
}

pub fn run(cli: &Cli, args: &MatchArgs) -> Result<()> {
    let sources = load(&args.sources, "sources", cli.verbose)?;
    let targets = load(&args.targets, "targets", cli.verbose)?;

    let records = if sources.is_empty() || targets.is_empty() { Vec::new() } else { match_indexed(&sources, &targets) };
    if cli.verbose > 0 { eprintln!("[match] {} matches", records.len()); }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    } else if records.is_empty() {
        eprintln!("No matches: one or both inputs contain no valid points.");
    } else {
        write_matches(&mut out, &records,
            (&args.sources.display().to_string(), &sources),
            (&args.targets.display().to_string(), &targets),
            args.precision,
        )?;
    }

    Ok(())
}
