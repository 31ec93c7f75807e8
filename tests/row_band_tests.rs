use rowchart_rs::core::{
    Group, GroupStyle, band_at_y, resolve_row_bands, total_rows_height,
};

fn three_rows() -> Vec<Group> {
    vec![
        Group::new("a", GroupStyle::Line, 100.0),
        Group::new("b", GroupStyle::Bar, 60.0),
        Group::new("c", GroupStyle::Band, 140.0),
    ]
}

#[test]
fn bands_stack_in_display_order() {
    let groups = three_rows();
    let bands = resolve_row_bands(&groups);

    assert_eq!(bands.len(), 3);
    assert_eq!((bands[0].top, bands[0].bottom), (0.0, 100.0));
    assert_eq!((bands[1].top, bands[1].bottom), (100.0, 160.0));
    assert_eq!((bands[2].top, bands[2].bottom), (160.0, 300.0));
    assert_eq!(total_rows_height(&bands), 300.0);
}

#[test]
fn hidden_groups_occupy_no_band() {
    let mut groups = three_rows();
    groups[1].visible = false;
    let bands = resolve_row_bands(&groups);

    assert_eq!(bands.len(), 2);
    assert_eq!(bands[1].group_id, "c");
    assert_eq!((bands[1].top, bands[1].bottom), (100.0, 240.0));
    assert_eq!(total_rows_height(&bands), 240.0);
}

#[test]
fn band_midpoint_and_height() {
    let bands = resolve_row_bands(&three_rows());
    assert_eq!(bands[0].height(), 100.0);
    assert_eq!(bands[0].midpoint(), 50.0);
    assert_eq!(bands[2].midpoint(), 230.0);
}

#[test]
fn band_at_y_maps_coordinates_to_rows() {
    let bands = resolve_row_bands(&three_rows());

    assert_eq!(band_at_y(&bands, 0.0).map(|b| b.group_id.as_str()), Some("a"));
    assert_eq!(band_at_y(&bands, 99.9).map(|b| b.group_id.as_str()), Some("a"));
    assert_eq!(band_at_y(&bands, 100.0).map(|b| b.group_id.as_str()), Some("b"));
    assert_eq!(band_at_y(&bands, 250.0).map(|b| b.group_id.as_str()), Some("c"));
    assert!(band_at_y(&bands, 300.0).is_none());
    assert!(band_at_y(&bands, -1.0).is_none());
}

#[test]
fn no_visible_groups_yields_empty_layout() {
    let mut groups = three_rows();
    for group in &mut groups {
        group.visible = false;
    }
    let bands = resolve_row_bands(&groups);
    assert!(bands.is_empty());
    assert_eq!(total_rows_height(&bands), 0.0);
}
