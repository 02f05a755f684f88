use std::io::{self, Write};

use geomatch::{IndexedPoint, MatchRecord};

/// Look up a normalized point by its original index (points are in ascending index order).
fn find(points: &[IndexedPoint], index: usize) -> Option<&IndexedPoint> {
    points.binary_search_by_key(&index, |p| p.index).ok().map(|i| &points[i])
}

/// Write match records as human-readable text, resolving indices back to coordinates.
pub fn write_matches<W: Write>(
    out: &mut W,
    records: &[MatchRecord],
    (source_name, sources): (&str, &[IndexedPoint]),
    (target_name, targets): (&str, &[IndexedPoint]),
    precision: usize,
) -> io::Result<()> {
    for record in records {
        let (Some(source), Some(target)) = (find(sources, record.source_index), find(targets, record.target_index)) else {
            continue;
        };
        writeln!(out, "  Point from {source_name} (idx {}): ({:.4}, {:.4})",
            record.source_index, source.coord.lat(), source.coord.lon())?;
        writeln!(out, "  is closest to Point from {target_name} (idx {}): ({:.4}, {:.4})",
            record.target_index, target.coord.lat(), target.coord.lon())?;
        writeln!(out, "  Distance: {:.*} km", precision, record.distance_km)?;
    }
    Ok(())
}
