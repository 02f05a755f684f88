use serde::Serialize;

use crate::coord::{normalize_collection, IndexedPoint, RawCoordinateInput};
use crate::distance::{geodesic_distance_km, NO_DISTANCE};

/// The nearest target for one source point. Indices refer to positions in the
/// caller's original input collections, not to the filtered points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchRecord {
    pub source_index: usize,
    pub target_index: usize,
    pub distance_km: f64,
}

/// Match every normalized source point to its nearest target by exhaustive
/// pairwise comparison. Ties keep the earliest target; a source whose every
/// distance failed to compute gets no record.
pub fn match_indexed(sources: &[IndexedPoint], targets: &[IndexedPoint]) -> Vec<MatchRecord> {
    sources.iter()
        .filter_map(|source| {
            let mut best: Option<(usize, f64)> = None;
            for target in targets {
                let distance = geodesic_distance_km(source.coord.as_tuple(), target.coord.as_tuple());
                if distance < best.map_or(NO_DISTANCE, |(_, d)| d) {
                    best = Some((target.index, distance));
                }
            }
            best.map(|(target_index, distance_km)| MatchRecord { source_index: source.index, target_index, distance_km })
        })
        .collect()
}

/// Normalize both collections and match each valid point of `sources` to the
/// nearest valid point of `targets`. Invalid elements are skipped; the result
/// is empty when either side has no valid points.
pub fn match_closest_points(sources: &[RawCoordinateInput], targets: &[RawCoordinateInput]) -> Vec<MatchRecord> {
    let sources = normalize_collection(sources);
    let targets = normalize_collection(targets);
    if sources.is_empty() || targets.is_empty() { return Vec::new() }

    match_indexed(&sources, &targets)
}
