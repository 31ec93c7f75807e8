use rowchart_rs::core::{DataPoint, Group, GroupStyle, aggregate_group_values};

#[test]
fn scalar_group_takes_min_max_over_y() {
    let group = Group::new("cpu", GroupStyle::Line, 100.0);
    let points = vec![
        DataPoint::scalar(0.0, 1.0),
        DataPoint::scalar(1.0, 5.0),
        DataPoint::scalar(2.0, 3.0),
    ];

    let values = aggregate_group_values(&group, &points).expect("values");
    assert_eq!(values.min_value, 1.0);
    assert_eq!(values.max_value, 5.0);
    assert_eq!(values.avg_value, None);
    assert_eq!(values.reference_line, None);
}

#[test]
fn band_group_takes_envelope_over_min_max_fields() {
    let group = Group::new("load", GroupStyle::Band, 100.0);
    let points = vec![
        DataPoint::band(0.0, 2.0, 8.0, 5.0),
        DataPoint::band(1.0, 1.0, 6.0, 3.5),
        DataPoint::band(2.0, 3.0, 9.0, 6.0),
    ];

    let values = aggregate_group_values(&group, &points).expect("values");
    assert_eq!(values.min_value, 1.0);
    assert_eq!(values.max_value, 9.0);
}

#[test]
fn reference_point_contributes_y_instead_of_band_fields() {
    let group = Group::new("load", GroupStyle::Band, 100.0);
    let mut reference = DataPoint::band(1.0, 1.0, 6.0, 3.5);
    reference.y = Some(20.0);
    let reference = reference.with_reference_line(20.0);

    let points = vec![DataPoint::band(0.0, 2.0, 8.0, 5.0), reference];

    let values = aggregate_group_values(&group, &points).expect("values");
    assert_eq!(values.max_value, 20.0);
    assert_eq!(values.reference_line, Some(20.0));
}

#[test]
fn average_comes_from_first_point_only() {
    let group = Group::new("cpu", GroupStyle::Line, 100.0);
    let mut first = DataPoint::scalar(0.0, 1.0);
    first.avg_value = Some(42.0);
    let mut second = DataPoint::scalar(1.0, 2.0);
    second.avg_value = Some(99.0);

    let values = aggregate_group_values(&group, &[first, second]).expect("values");
    assert_eq!(values.avg_value, Some(42.0));
}

#[test]
fn fixed_bounds_override_computed_range() {
    let group = Group::new("cpu", GroupStyle::Line, 100.0).with_fixed_bounds(0.0, 100.0);
    let points = vec![DataPoint::scalar(0.0, 40.0), DataPoint::scalar(1.0, 60.0)];

    let values = aggregate_group_values(&group, &points).expect("values");
    assert_eq!(values.min_value, 0.0);
    assert_eq!(values.max_value, 100.0);
}

#[test]
fn empty_series_without_fixed_bounds_contributes_nothing() {
    let group = Group::new("cpu", GroupStyle::Line, 100.0);
    assert!(aggregate_group_values(&group, &[]).is_none());
}

#[test]
fn empty_series_with_fixed_bounds_still_contributes() {
    let group = Group::new("cpu", GroupStyle::Line, 100.0).with_fixed_bounds(-5.0, 5.0);
    let values = aggregate_group_values(&group, &[]).expect("values");
    assert_eq!(values.min_value, -5.0);
    assert_eq!(values.max_value, 5.0);
}

#[test]
fn non_finite_values_are_ignored() {
    let group = Group::new("cpu", GroupStyle::Line, 100.0);
    let points = vec![
        DataPoint::scalar(0.0, f64::NAN),
        DataPoint::scalar(1.0, 7.0),
        DataPoint::scalar(2.0, 3.0),
    ];

    let values = aggregate_group_values(&group, &points).expect("values");
    assert_eq!(values.min_value, 3.0);
    assert_eq!(values.max_value, 7.0);
}
