// Integration tests for the public matching API:
//   parsing notations, collection normalization, geodesic distance properties,
//   and nearest-point matching with index preservation and tie-breaking.

use geomatch::{
    geodesic_distance_km, match_closest_points, parse_single_axis_value, CoordError, RawCoordinateInput,
    NO_DISTANCE,
};

#[test]
fn distance_to_self_is_zero_across_the_globe() {
    for lat in (-90..=90).step_by(15) {
        for lon in (-180..=180).step_by(30) {
            let point = (lat as f64, lon as f64);
            assert_eq!(geodesic_distance_km(point, point), 0.0, "at {point:?}");
        }
    }
}

#[test]
fn distance_is_symmetric_for_scattered_pairs() {
    let points = [(12.3, 45.6), (-67.8, -123.4), (0.0, 180.0), (0.0, -180.0), (-90.0, 33.0), (45.0, 0.0)];
    for a in points {
        for b in points {
            assert_eq!(geodesic_distance_km(a, b), geodesic_distance_km(b, a), "{a:?} <-> {b:?}");
        }
    }
}

#[test]
fn distance_rejects_out_of_range_latitude() {
    assert_eq!(geodesic_distance_km((91.0, 0.0), (0.0, 0.0)), NO_DISTANCE);
    assert!(geodesic_distance_km((91.0, 0.0), (0.0, 0.0)).is_infinite());
}

#[test]
fn documented_notations_parse_to_decimal_degrees() {
    let lat = parse_single_axis_value("31°13'27\"N").unwrap();
    assert!((lat - 31.2242).abs() < 1e-4);

    let lon = parse_single_axis_value("121d 28m 15s E").unwrap();
    assert!((lon - 121.4708).abs() < 1e-4);

    assert!((parse_single_axis_value("-74.006").unwrap() - -74.006).abs() < 1e-12);
}

#[test]
fn invalid_dms_minutes_fail_instead_of_wrapping() {
    assert_eq!(parse_single_axis_value("10°75'0\"N"), Err(CoordError::MinutesOutOfRange(75.0)));
}

#[test]
fn empty_collection_on_either_side_yields_no_matches() {
    assert!(match_closest_points(&[], &[(0.0, 0.0).into()]).is_empty());
    assert!(match_closest_points(&[(0.0, 0.0).into()], &[]).is_empty());
}

#[test]
fn both_sources_match_the_near_target() {
    let sources: Vec<RawCoordinateInput> = vec![(0.0, 0.0).into(), (1.0, 1.0).into()];
    let targets: Vec<RawCoordinateInput> = vec![(0.001, 0.001).into(), (50.0, 50.0).into()];

    let records = match_closest_points(&sources, &targets);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.target_index == 0));
    assert_eq!(records[0].source_index, 0);
    assert_eq!(records[1].source_index, 1);

    let far = geodesic_distance_km((0.0, 0.0), (50.0, 50.0));
    assert!(records[0].distance_km < far);
    assert!(records[0].distance_km < records[1].distance_km);
}

#[test]
fn original_indices_survive_filtering() {
    let sources: Vec<RawCoordinateInput> = vec!["bad".into(), "10,20".into(), "30,40".into()];
    let targets: Vec<RawCoordinateInput> = vec!["also bad".into(), (95.0, 0.0).into(), (29.0, 41.0).into()];

    let records = match_closest_points(&sources, &targets);
    let pairs = records.iter().map(|r| (r.source_index, r.target_index)).collect::<Vec<_>>();
    assert_eq!(pairs, vec![(1, 2), (2, 2)]);
}

#[test]
fn one_bad_point_does_not_abort_the_rest() {
    let mut sources: Vec<RawCoordinateInput> = (0..100).map(|i| (i as f64 * 0.5, 0.0).into()).collect();
    sources[37] = "37°99'N, nowhere".into();

    let records = match_closest_points(&sources, &[(0.0, 0.0).into()]);
    assert_eq!(records.len(), 99);
    assert!(records.iter().all(|r| r.source_index != 37));
}

#[test]
fn equidistant_targets_resolve_to_lower_index() {
    let sources: Vec<RawCoordinateInput> = vec![(0.0, 0.0).into()];
    let targets: Vec<RawCoordinateInput> = vec![(0.0, 2.0).into(), (0.0, -2.0).into()];

    let records = match_closest_points(&sources, &targets);
    assert_eq!(records[0].target_index, 0);
}

#[test]
fn axis_pairs_accept_mixed_notations() {
    let sources = vec![RawCoordinateInput::AxisPair("40°42'46\"N".into(), "74°0'22\"W".into())];
    let targets = vec![
        RawCoordinateInput::AxisPair("51.5074°".into(), "-0.1278".into()),
        RawCoordinateInput::AxisPair("40.7".into(), "-74.0".into()),
    ];

    let records = match_closest_points(&sources, &targets);
    assert_eq!(records[0].target_index, 1);
    assert!(records[0].distance_km < 5.0);
}
