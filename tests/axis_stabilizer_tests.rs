use rowchart_rs::api::{AxisWidths, resolve_axis_relayout};
use rowchart_rs::core::{AxisSide, ValueAxis, ValueRange, estimate_label_text_width_px};

#[test]
fn matching_widths_are_stable() {
    let widths = AxisWidths::new(42.0, 0.0);
    let decision = resolve_axis_relayout(widths, widths);
    assert!(decision.stable);
    assert_eq!(decision.next, widths);
}

#[test]
fn changed_width_forces_a_relayout() {
    let previous = AxisWidths::new(0.0, 0.0);
    let required = AxisWidths::new(29.0, 0.0);
    let decision = resolve_axis_relayout(previous, required);
    assert!(!decision.stable);
    assert_eq!(decision.next, required);
}

#[test]
fn either_side_changing_is_unstable() {
    let previous = AxisWidths::new(29.0, 18.0);
    let decision = resolve_axis_relayout(previous, AxisWidths::new(29.0, 24.0));
    assert!(!decision.stable);
}

#[test]
fn relayout_converges_in_one_step_for_fixed_data() {
    let previous = AxisWidths::default();
    let required = AxisWidths::new(35.0, 12.0);

    let first = resolve_axis_relayout(previous, required);
    assert!(!first.stable);
    let second = resolve_axis_relayout(first.next, required);
    assert!(second.stable);
}

#[test]
fn plot_width_subtracts_both_gutters() {
    let widths = AxisWidths::new(30.0, 20.0);
    assert_eq!(widths.plot_width(800.0), 750.0);
}

#[test]
fn plot_width_never_collapses_below_one_pixel() {
    let widths = AxisWidths::new(500.0, 500.0);
    assert_eq!(widths.plot_width(800.0), 1.0);
}

#[test]
fn axis_without_observations_is_hidden() {
    let axis = ValueAxis::new(AxisSide::Right);
    let state = axis.finalize(12.0);
    assert_eq!(state.required_width_px, 0.0);
}

#[test]
fn axis_accumulates_the_union_of_observed_ranges() {
    let mut axis = ValueAxis::new(AxisSide::Left);
    axis.begin_pass();
    axis.observe(ValueRange::new(5.0, 10.0));
    axis.observe(ValueRange::new(-2.0, 7.0));

    assert_eq!(axis.accumulated(), Some(ValueRange::new(-2.0, 10.0)));
}

#[test]
fn begin_pass_clears_the_accumulator() {
    let mut axis = ValueAxis::new(AxisSide::Left);
    axis.observe(ValueRange::new(0.0, 1.0));
    axis.begin_pass();
    assert_eq!(axis.accumulated(), None);
}

#[test]
fn finalized_width_is_whole_pixels_and_covers_the_widest_label() {
    let mut axis = ValueAxis::new(AxisSide::Left);
    axis.begin_pass();
    axis.observe(ValueRange::new(0.0, 100_000.0));

    let state = axis.finalize(12.0);
    assert_eq!(state.required_width_px, state.required_width_px.trunc());
    assert!(state.required_width_px > estimate_label_text_width_px("100000", 12.0));
}

#[test]
fn wider_ranges_never_shrink_the_gutter() {
    let mut narrow = ValueAxis::new(AxisSide::Left);
    narrow.begin_pass();
    narrow.observe(ValueRange::new(0.0, 9.0));

    let mut wide = ValueAxis::new(AxisSide::Left);
    wide.begin_pass();
    wide.observe(ValueRange::new(0.0, 999_999.0));

    assert!(
        wide.finalize(12.0).required_width_px >= narrow.finalize(12.0).required_width_px
    );
}
