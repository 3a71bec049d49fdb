// crates/gf_interp/tests/properties.rs

//! 插值器的通用性质

use gf_geo::GeoBounds;
use gf_interp::prelude::*;
use proptest::prelude::*;

/// 4×4 网格（间距 0.01°）上随机选取互不相同的格点，并加 ±0.002° 抖动
fn known_points() -> impl Strategy<Value = Vec<KnownPoint>> {
    proptest::sample::subsequence((0..16usize).collect::<Vec<_>>(), 1..=8)
        .prop_flat_map(|cells| {
            let n = cells.len();
            (
                Just(cells),
                proptest::collection::vec(
                    (-0.002..0.002f64, -0.002..0.002f64, -50.0..200.0f64),
                    n,
                ),
            )
        })
        .prop_map(|(cells, attrs)| {
            cells
                .into_iter()
                .zip(attrs)
                .map(|(cell, (dlat, dlon, value))| {
                    let row = (cell / 4) as f64;
                    let col = (cell % 4) as f64;
                    KnownPoint::new(-7.8 + 0.01 * row + dlat, 110.3 + 0.01 * col + dlon, value)
                })
                .collect()
        })
}

fn query_point() -> impl Strategy<Value = QueryPoint> {
    (-7.81..-7.76f64, 110.29..110.34f64).prop_map(|(lat, lon)| QueryPoint::new(lat, lon))
}

fn tolerance(known: &[KnownPoint], a: f64) -> f64 {
    let max_abs = known.iter().map(|p| p.value.abs()).fold(0.0, f64::max);
    1e-6 * (1.0 + max_abs + a.abs())
}

proptest! {
    #[test]
    fn single_point_passes_value_through(
        lat in -7.81..-7.76f64,
        lon in 110.29..110.34f64,
        value in -50.0..200.0f64,
        query in query_point(),
    ) {
        let known = [KnownPoint::new(lat, lon, value)];
        let expected = value.max(0.0);

        prop_assert_eq!(OrdinaryKriging::default().interpolate(&query, &known), Some(expected));
        prop_assert_eq!(ThinPlateSpline::default().interpolate(&query, &known), Some(expected));
        prop_assert_eq!(KnnRegressor::default().interpolate(&query, &known), Some(expected));
    }

    #[test]
    fn empty_input_has_no_estimate(query in query_point()) {
        prop_assert!(OrdinaryKriging::default().interpolate(&query, &[]).is_none());
        prop_assert!(ThinPlateSpline::default().interpolate(&query, &[]).is_none());
        prop_assert!(KnnRegressor::default().interpolate(&query, &[]).is_none());
    }

    #[test]
    fn estimates_are_non_negative(known in known_points(), query in query_point()) {
        let kriging = OrdinaryKriging::default().tuned(&known);
        let estimators: [&dyn SpatialEstimator; 3] = [
            &kriging,
            &ThinPlateSpline::default(),
            &KnnRegressor::default(),
        ];
        for estimator in estimators {
            let value = estimator.interpolate(&query, &known);
            prop_assert!(value.is_some());
            prop_assert!(value.is_some_and(|v| v >= 0.0), "{} -> {:?}", estimator.name(), value);
        }
    }

    #[test]
    fn kriging_is_permutation_invariant(
        known in known_points(),
        query in query_point(),
        shift in 0..8usize,
        reverse in any::<bool>(),
    ) {
        let mut permuted = known.clone();
        let len = permuted.len();
        permuted.rotate_left(shift % len);
        if reverse {
            permuted.reverse();
        }

        let a = OrdinaryKriging::default().tuned(&known).estimate(&query, &known);
        let b = OrdinaryKriging::default().tuned(&permuted).estimate(&query, &permuted);
        let (a, b) = (a.map(|e| e.raw), b.map(|e| e.raw));
        prop_assert!(a.is_some() && b.is_some());
        let (a, b) = (a.unwrap_or_default(), b.unwrap_or_default());
        prop_assert!((a - b).abs() <= tolerance(&known, a), "{} vs {}", a, b);
    }

    #[test]
    fn thin_plate_spline_is_permutation_invariant(
        known in known_points(),
        query in query_point(),
        shift in 0..8usize,
    ) {
        let mut rotated = known.clone();
        let len = rotated.len();
        rotated.rotate_left(shift % len);

        let tps = ThinPlateSpline::default();
        let a = tps.estimate(&query, &known).map(|e| e.raw).unwrap_or(f64::NAN);
        let b = tps.estimate(&query, &rotated).map(|e| e.raw).unwrap_or(f64::NAN);
        prop_assert!((a - b).abs() <= tolerance(&known, a), "{} vs {}", a, b);
    }

    #[test]
    fn knn_with_large_k_matches_idw(known in known_points(), query in query_point()) {
        let knn = KnnRegressor::new(known.len() + 2, 1.0);
        let idw = InverseDistanceWeighting::new(1.0, 0.0);

        let a = knn.interpolate(&query, &known).unwrap_or(f64::NAN);
        let b = idw.interpolate(&query, &known).unwrap_or(f64::NAN);
        let max_abs = known.iter().map(|p| p.value.abs()).fold(0.0, f64::max);
        prop_assert!((a - b).abs() <= 1e-9 * (1.0 + max_abs), "{} vs {}", a, b);
    }

    #[test]
    fn knn_power_zero_is_unweighted_mean(known in known_points(), query in query_point()) {
        prop_assume!(known.len() >= 2);
        let knn = KnnRegressor::new(known.len(), 0.0);
        let mean = known.iter().map(|p| p.value).sum::<f64>() / known.len() as f64;

        let value = knn.interpolate(&query, &known).unwrap_or(f64::NAN);
        prop_assert!((value - mean.max(0.0)).abs() < 1e-9);
    }

    #[test]
    fn kriging_weights_sum_to_one(known in known_points(), query in query_point()) {
        let kriging = OrdinaryKriging::default().tuned(&known);
        let weights = kriging.weights(&query, &known);
        prop_assert!(weights.is_ok());
        if let Ok(w) = weights {
            prop_assert_eq!(w.weights.len(), known.len());
            prop_assert!((w.sum() - 1.0).abs() < 1e-6, "sum = {}", w.sum());
        }
    }

    #[test]
    fn grid_has_all_nodes(known in known_points(), grid_size in 0..6usize) {
        let bounds = GeoBounds::new(-7.76, -7.81, 110.34, 110.29).unwrap();
        let nodes = generate_interpolation_grid(&KnnRegressor::default(), &bounds, &known, grid_size);
        prop_assert_eq!(nodes.len(), (grid_size + 1) * (grid_size + 1));
        prop_assert!(nodes.iter().all(|n| bounds.contains(&QueryPoint::new(n.lat, n.lon))));
    }
}
