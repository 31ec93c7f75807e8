use rowchart_rs::api::{PendingRedraw, RedrawTopic};
use rowchart_rs::core::{
    DataPoint, Group, GroupStyle, SamplingOptions, ShadeOptions, ShadeOrientation, Viewport,
};
use rowchart_rs::render::NullRenderer;
use rowchart_rs::{ChartEngine, ChartEngineConfig, ChartError};

fn engine(viewport: Viewport) -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::new(viewport))
        .expect("valid config")
}

fn ramp(count: usize, scale: f64) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::scalar(i as f64, i as f64 * scale))
        .collect()
}

#[test]
fn invalid_viewport_is_rejected_at_construction() {
    let result = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(0, 400)),
    );
    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport { width: 0, .. })
    ));
}

#[test]
fn first_redraw_aborts_once_then_commits() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(50, 2.0)).expect("series");

    // Gutters start at zero; the first pass discovers the label width and
    // restarts, the second pass finds the same width and commits.
    let outcome = engine.redraw().expect("redraw");
    assert!(outcome.committed);
    assert_eq!(outcome.passes, 2);
    assert_eq!(outcome.aborted_passes, 1);
    assert!(engine.axis_widths().left > 0.0);
    assert_eq!(engine.axis_widths().right, 0.0);
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn second_redraw_commits_on_the_first_pass() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(50, 2.0)).expect("series");
    engine.redraw().expect("first redraw");

    let outcome = engine.redraw().expect("second redraw");
    assert!(outcome.committed);
    assert_eq!(outcome.passes, 1);
    assert_eq!(outcome.aborted_passes, 0);
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn aborted_passes_render_nothing() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(50, 2.0)).expect("series");

    engine.redraw().expect("redraw");
    // Two passes ran but only the committed frame reached the backend.
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn single_pass_cap_forces_a_commit() {
    let mut config = ChartEngineConfig::new(Viewport::new(800, 400));
    config.max_relayout_passes = 1;
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("valid config");
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(50, 2.0)).expect("series");

    let outcome = engine.redraw().expect("redraw");
    assert!(outcome.committed);
    assert_eq!(outcome.passes, 1);
    assert_eq!(outcome.aborted_passes, 0);
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn committed_frame_carries_series_and_labels() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![
            Group::new("cpu", GroupStyle::Line, 120.0),
            Group::new("disk", GroupStyle::Bar, 120.0),
        ])
        .expect("groups");
    engine.set_series("cpu", ramp(50, 2.0)).expect("series");
    engine.set_series("disk", ramp(50, 1.0)).expect("series");
    engine.redraw().expect("redraw");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_rect_count, 50);
    // Non-flat scalar groups each place a max/min label pair.
    assert_eq!(renderer.last_label_count, 4);
}

#[test]
fn redraw_without_groups_commits_an_empty_frame() {
    let mut engine = engine(Viewport::new(800, 400));
    let outcome = engine.redraw().expect("redraw");
    assert!(outcome.committed);
    assert_eq!(outcome.passes, 1);
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_path_count, 0);
}

#[test]
fn change_signals_coalesce_into_one_redraw() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(10, 1.0)).expect("series");
    engine.request_redraw(RedrawTopic::General);
    assert!(engine.needs_redraw());

    let first = engine.redraw_if_needed().expect("redraw");
    assert!(first.is_some());
    assert!(!engine.needs_redraw());

    let second = engine.redraw_if_needed().expect("redraw");
    assert!(second.is_none());
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn own_baseline_shading_adds_a_fill_path() {
    let mut engine = engine(Viewport::new(800, 400));
    let shaded = Group::new("cpu", GroupStyle::Line, 120.0).with_shading(ShadeOptions {
        enabled: true,
        orientation: ShadeOrientation::Own,
        group_id: None,
    });
    engine.set_groups(vec![shaded]).expect("groups");
    engine.set_series("cpu", ramp(20, 1.0)).expect("series");
    engine.redraw().expect("redraw");

    // One shade polygon plus the line itself.
    assert_eq!(engine.renderer().last_path_count, 2);
}

#[test]
fn group_shading_fills_between_two_paths() {
    let mut engine = engine(Viewport::new(800, 400));
    let shaded = Group::new("upper", GroupStyle::Line, 120.0).with_shading(ShadeOptions {
        enabled: true,
        orientation: ShadeOrientation::Group,
        group_id: Some("lower".to_owned()),
    });
    engine
        .set_groups(vec![shaded, Group::new("lower", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("upper", ramp(20, 2.0)).expect("series");
    engine.set_series("lower", ramp(20, 1.0)).expect("series");
    engine.redraw().expect("redraw");

    assert_eq!(engine.renderer().last_path_count, 3);
}

#[test]
fn shading_against_a_hidden_target_is_skipped() {
    let mut engine = engine(Viewport::new(800, 400));
    let shaded = Group::new("cpu", GroupStyle::Line, 120.0).with_shading(ShadeOptions {
        enabled: true,
        orientation: ShadeOrientation::Group,
        group_id: Some("ghost".to_owned()),
    });
    engine.set_groups(vec![shaded]).expect("groups");
    engine.set_series("cpu", ramp(20, 1.0)).expect("series");

    let outcome = engine.redraw().expect("redraw");
    assert!(outcome.committed);
    // The shade fill is dropped but the line still draws.
    assert_eq!(engine.renderer().last_path_count, 1);
}

#[test]
fn pending_topics_collapse_into_one_take() {
    let mut pending = PendingRedraw::default();
    assert!(!pending.is_pending());

    pending.request(RedrawTopic::Data);
    pending.request(RedrawTopic::TimeScale);
    assert!(pending.contains(RedrawTopic::Data));
    assert!(pending.contains(RedrawTopic::TimeScale));
    assert!(!pending.contains(RedrawTopic::Groups));

    assert!(pending.take());
    assert!(!pending.is_pending());
    assert!(!pending.take());
}

#[test]
fn set_series_for_an_unknown_group_fails() {
    let mut engine = engine(Viewport::new(800, 400));
    let result = engine.set_series("ghost", ramp(3, 1.0));
    assert!(matches!(result, Err(ChartError::UnknownGroup(id)) if id == "ghost"));
}

#[test]
fn duplicate_group_ids_are_rejected() {
    let mut engine = engine(Viewport::new(800, 400));
    let result = engine.set_groups(vec![
        Group::new("cpu", GroupStyle::Line, 120.0),
        Group::new("cpu", GroupStyle::Bar, 60.0),
    ]);
    assert!(result.is_err());
}

#[test]
fn removed_groups_drop_their_series() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![
            Group::new("cpu", GroupStyle::Line, 120.0),
            Group::new("mem", GroupStyle::Line, 120.0),
        ])
        .expect("groups");
    engine.set_series("cpu", ramp(5, 1.0)).expect("series");
    engine.set_series("mem", ramp(5, 1.0)).expect("series");

    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    assert!(engine.set_series("mem", ramp(5, 1.0)).is_err());
    assert_eq!(engine.data_time_range(), Some((0.0, 4.0)));
}

#[test]
fn non_finite_timestamps_are_rejected() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    let result = engine.set_series("cpu", vec![DataPoint::scalar(f64::NAN, 1.0)]);
    assert!(result.is_err());
}

#[test]
fn total_graph_height_follows_visible_rows() {
    let mut engine = engine(Viewport::new(800, 400));
    let mut hidden = Group::new("mem", GroupStyle::Line, 80.0);
    hidden.visible = false;
    engine
        .set_groups(vec![
            Group::new("cpu", GroupStyle::Line, 120.0),
            hidden,
            Group::new("disk", GroupStyle::Bar, 60.0),
        ])
        .expect("groups");

    assert_eq!(engine.total_graph_height(), 180.0);
}

#[test]
fn implicit_time_scale_fit_does_not_requeue_a_redraw() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(20, 1.0)).expect("series");

    // The time scale is unset, so the redraw fits it from data; that fit
    // must not mark the engine dirty again.
    engine.redraw().expect("redraw");
    assert!(!engine.needs_redraw());
    assert!(engine.redraw_if_needed().expect("redraw").is_none());
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn explicit_time_scale_fit_still_requests_a_redraw() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(20, 1.0)).expect("series");
    engine.redraw().expect("redraw");

    engine.fit_time_scale_to_data().expect("fit");
    assert!(engine.needs_redraw());
}

#[test]
fn forced_commit_adopts_the_required_widths() {
    let mut config = ChartEngineConfig::new(Viewport::new(800, 400));
    config.max_relayout_passes = 1;
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("valid config");
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(50, 2.0)).expect("series");

    // The only permitted pass commits with unconverged widths but stores
    // the required ones, so the next redraw is stable from its first pass.
    engine.redraw().expect("first redraw");
    let settled = engine.axis_widths();
    assert!(settled.left > 0.0);

    engine.redraw().expect("second redraw");
    assert_eq!(engine.axis_widths(), settled);
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn redraw_fits_the_time_scale_from_data_when_unset() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Line, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(11, 1.0)).expect("series");

    assert!(engine.time_scale().is_none());
    engine.redraw().expect("redraw");

    let scale = engine.time_scale().expect("fitted scale");
    assert_eq!(scale.full_range(), (0.0, 10.0));
}

#[test]
fn sampling_is_applied_per_group_during_layout() {
    let mut engine = engine(Viewport::new(800, 400));
    let sampled = Group::new("cpu", GroupStyle::Point, 120.0).with_sampling(SamplingOptions {
        enabled: true,
        target_point_count: 16,
    });
    engine.set_groups(vec![sampled]).expect("groups");
    engine.set_series("cpu", ramp(1000, 0.5)).expect("series");
    engine.redraw().expect("redraw");

    assert!(engine.renderer().last_point_count <= 16);
    assert!(engine.renderer().last_point_count > 2);
}

#[test]
fn visible_range_controls_the_rendered_window() {
    let mut engine = engine(Viewport::new(800, 400));
    engine
        .set_groups(vec![Group::new("cpu", GroupStyle::Point, 120.0)])
        .expect("groups");
    engine.set_series("cpu", ramp(100, 1.0)).expect("series");
    engine.set_visible_range(40.0, 50.0).expect("range");
    engine.redraw().expect("redraw");

    // Padding ratio 1.0 windows one extra span on each side: [30, 60].
    assert_eq!(engine.renderer().last_point_count, 31);
}
