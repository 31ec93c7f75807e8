use rowchart_rs::core::{DataPoint, SamplingOptions, points_in_time_window, sample_to_target};

fn scalar_series(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::scalar(i as f64, (i as f64 * 0.37).sin() * 50.0))
        .collect()
}

#[test]
fn window_keeps_only_points_inside_inclusive_bounds() {
    let points = scalar_series(10);
    let windowed = points_in_time_window(&points, 3.0, 6.0);

    let times: Vec<f64> = windowed.iter().map(|p| p.x).collect();
    assert_eq!(times, vec![3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn window_preserves_order_and_source() {
    let points = scalar_series(20);
    let before = points.clone();
    let windowed = points_in_time_window(&points, 5.0, 15.0);

    assert_eq!(points, before);
    for pair in windowed.windows(2) {
        assert!(pair[0].x <= pair[1].x);
    }
}

#[test]
fn window_is_idempotent() {
    let points = scalar_series(30);
    let once = points_in_time_window(&points, 4.0, 22.0);
    let twice = points_in_time_window(&once, 4.0, 22.0);
    assert_eq!(once, twice);
}

#[test]
fn window_accepts_reversed_bounds() {
    let points = scalar_series(10);
    assert_eq!(
        points_in_time_window(&points, 6.0, 3.0),
        points_in_time_window(&points, 3.0, 6.0)
    );
}

#[test]
fn empty_input_yields_empty_window() {
    assert!(points_in_time_window(&[], 0.0, 100.0).is_empty());
}

#[test]
fn disabled_sampling_passes_series_through() {
    let points = scalar_series(100);
    let options = SamplingOptions {
        enabled: false,
        target_point_count: 10,
    };
    assert_eq!(rowchart_rs::core::sample_series(&points, options), points);
}

#[test]
fn sampling_never_increases_point_count() {
    let points = scalar_series(500);
    for target in [2, 10, 50, 499, 500, 600] {
        let sampled = sample_to_target(&points, target);
        assert!(sampled.len() <= target.max(points.len()));
        assert!(sampled.len() <= points.len());
    }
}

#[test]
fn sampling_retains_first_and_last_point() {
    let points = scalar_series(321);
    let sampled = sample_to_target(&points, 25);
    assert_eq!(sampled.first(), points.first());
    assert_eq!(sampled.last(), points.last());
}

#[test]
fn sampling_is_deterministic() {
    let points = scalar_series(1000);
    assert_eq!(sample_to_target(&points, 64), sample_to_target(&points, 64));
}

#[test]
fn sampling_below_target_is_identity() {
    let points = scalar_series(8);
    assert_eq!(sample_to_target(&points, 20), points);
}

#[test]
fn band_series_sampling_retains_endpoints() {
    let points: Vec<DataPoint> = (0..100)
        .map(|i| {
            let t = i as f64;
            DataPoint::band(t, t - 1.0, t + 1.0, t)
        })
        .collect();

    let sampled = sample_to_target(&points, 12);
    assert!(sampled.len() <= 12);
    assert_eq!(sampled.first(), points.first());
    assert_eq!(sampled.last(), points.last());
}
