use super::{CoordError, IndexedPoint, RawCoordinateInput};

/// Normalize a collection of raw inputs, silently dropping any element that
/// fails to parse or is out of range. Surviving points keep their original
/// 0-based index and relative order.
pub fn normalize_collection(inputs: &[RawCoordinateInput]) -> Vec<IndexedPoint> {
    inputs.iter().enumerate()
        .filter_map(|(index, input)| input.normalize().ok().map(|coord| IndexedPoint { index, coord }))
        .collect()
}

/// Like [`normalize_collection`], but also returns the `(index, reason)` of every dropped element.
pub fn normalize_collection_with_rejects(inputs: &[RawCoordinateInput]) -> (Vec<IndexedPoint>, Vec<(usize, CoordError)>) {
    let mut points = Vec::with_capacity(inputs.len());
    let mut rejects = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        match input.normalize() {
            Ok(coord) => points.push(IndexedPoint { index, coord }),
            Err(err) => rejects.push((index, err)),
        }
    }

    (points, rejects)
}
