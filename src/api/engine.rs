use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{
    AxisSide, DataPoint, Group, GroupScaleValues, GroupStyle, ProjectedSeries, RowBand, TimeScale,
    ValueAxis, aggregate_group_values, apply_stacking, band_at_y, initial_shade_links,
    place_group_labels, points_in_time_window, project_band_series, project_scalar_series,
    resolve_row_bands, resolve_shade_target, sample_series, total_rows_height,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{LabelPrimitive, RenderFrame, Renderer};

use super::axis_stabilizer::{AxisWidths, resolve_axis_relayout};
use super::engine_config::ChartEngineConfig;
use super::events::{ChartEvent, EventHandler};
use super::frame_builder::{emit_series, emit_shading};
use super::invalidation::{PendingRedraw, RedrawTopic};

/// Result of one `redraw` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawOutcome {
    pub committed: bool,
    /// Layout passes run, including aborted ones.
    pub passes: usize,
    pub aborted_passes: usize,
}

enum PassOutcome {
    Committed(RenderFrame),
    Aborted { next_widths: AxisWidths },
}

/// Row-oriented chart engine.
///
/// Owns the group registry (display order), per-group series snapshots, the
/// shared time scale, both value axes and the coalesced invalidation state.
/// One `redraw` runs the full layout pipeline, re-running it when a value
/// axis changes its required gutter width mid-pass.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    groups: Vec<Group>,
    series: IndexMap<String, Vec<DataPoint>>,
    time_scale: Option<TimeScale>,
    left_axis: ValueAxis,
    right_axis: ValueAxis,
    axis_widths: AxisWidths,
    pending: PendingRedraw,
    aborted_last_pass: bool,
    hovered_group: Option<String>,
    event_handler: Option<EventHandler>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            groups: Vec::new(),
            series: IndexMap::new(),
            time_scale: None,
            left_axis: ValueAxis::new(AxisSide::Left),
            right_axis: ValueAxis::new(AxisSide::Right),
            axis_widths: AxisWidths::default(),
            pending: PendingRedraw::default(),
            aborted_last_pass: false,
            hovered_group: None,
            event_handler: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn axis_widths(&self) -> AxisWidths {
        self.axis_widths
    }

    #[must_use]
    pub fn aborted_last_pass(&self) -> bool {
        self.aborted_last_pass
    }

    #[must_use]
    pub fn time_scale(&self) -> Option<TimeScale> {
        self.time_scale
    }

    /// Replaces the group collection; removed groups drop their series.
    pub fn set_groups(&mut self, groups: Vec<Group>) -> ChartResult<()> {
        for group in &groups {
            group.validate()?;
            if groups.iter().filter(|other| other.id == group.id).count() > 1 {
                return Err(ChartError::InvalidData(format!(
                    "duplicate group id `{}`",
                    group.id
                )));
            }
        }

        self.series
            .retain(|id, _| groups.iter().any(|group| &group.id == id));
        self.groups = groups;
        self.request_redraw(RedrawTopic::Groups);
        Ok(())
    }

    /// Replaces one group's data snapshot (time-ordered points).
    pub fn set_series(&mut self, group_id: &str, points: Vec<DataPoint>) -> ChartResult<()> {
        if !self.groups.iter().any(|group| group.id == group_id) {
            return Err(ChartError::UnknownGroup(group_id.to_owned()));
        }
        for point in &points {
            if !point.x.is_finite() {
                return Err(ChartError::InvalidData(
                    "point timestamps must be finite".to_owned(),
                ));
            }
        }

        self.series.insert(group_id.to_owned(), points);
        self.request_redraw(RedrawTopic::Data);
        Ok(())
    }

    pub fn set_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        match &mut self.time_scale {
            Some(scale) => scale.set_visible_range(start, end)?,
            None => self.time_scale = Some(TimeScale::new(start, end)?),
        }
        self.request_redraw(RedrawTopic::TimeScale);
        Ok(())
    }

    /// Fits the time scale to all visible groups' data.
    pub fn fit_time_scale_to_data(&mut self) -> ChartResult<()> {
        self.time_scale = Some(self.fitted_time_scale()?);
        self.request_redraw(RedrawTopic::TimeScale);
        Ok(())
    }

    fn fitted_time_scale(&self) -> ChartResult<TimeScale> {
        let all_points: Vec<DataPoint> = self
            .visible_groups()
            .filter_map(|group| self.series.get(&group.id))
            .flatten()
            .copied()
            .collect();
        if all_points.is_empty() {
            return Err(ChartError::InvalidData(
                "cannot fit time scale: no visible data".to_owned(),
            ));
        }

        TimeScale::from_data(&all_points)
    }

    /// Min/max timestamp over the visible groups' data.
    #[must_use]
    pub fn data_time_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for group in self.visible_groups() {
            for point in self.series.get(&group.id).into_iter().flatten() {
                min = min.min(point.x);
                max = max.max(point.x);
                seen = true;
            }
        }
        seen.then_some((min, max))
    }

    /// Canvas height required by the visible rows.
    #[must_use]
    pub fn total_graph_height(&self) -> f64 {
        total_rows_height(&resolve_row_bands(self.visible_groups()))
    }

    pub fn request_redraw(&mut self, topic: RedrawTopic) {
        self.pending.request(topic);
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.pending.is_pending()
    }

    /// Runs one coalesced redraw if any change signal is pending.
    pub fn redraw_if_needed(&mut self) -> ChartResult<Option<RedrawOutcome>> {
        if !self.pending.take() {
            return Ok(None);
        }
        self.redraw().map(Some)
    }

    /// Runs the layout pipeline and hands the committed frame to the renderer.
    ///
    /// A pass aborts when either value axis ends up requiring a different
    /// gutter width than the pass started with; the partially built frame is
    /// dropped and the pass re-runs with the corrected widths. The final
    /// permitted pass always commits.
    pub fn redraw(&mut self) -> ChartResult<RedrawOutcome> {
        self.pending.take();
        if self.time_scale.is_none() && self.data_time_range().is_some() {
            // The implicit fit must not re-queue the pass it runs inside.
            self.time_scale = Some(self.fitted_time_scale()?);
        }

        let mut outcome = RedrawOutcome {
            committed: false,
            passes: 0,
            aborted_passes: 0,
        };

        for attempt in 0..self.config.max_relayout_passes {
            let force_commit = attempt + 1 == self.config.max_relayout_passes;
            outcome.passes += 1;

            match self.run_layout_pass(force_commit)? {
                PassOutcome::Committed(frame) => {
                    self.renderer.render(&frame)?;
                    self.aborted_last_pass = false;
                    outcome.committed = true;
                    return Ok(outcome);
                }
                PassOutcome::Aborted { next_widths } => {
                    outcome.aborted_passes += 1;
                    self.aborted_last_pass = true;
                    debug!(
                        left = next_widths.left,
                        right = next_widths.right,
                        "axis gutter width changed, restarting layout pass"
                    );
                    self.axis_widths = next_widths;
                }
            }
        }

        Ok(outcome)
    }

    /// Registers the opaque callback receiving pointer-driven events.
    pub fn set_event_handler(&mut self, handler: impl FnMut(ChartEvent) + 'static) {
        self.event_handler = Some(Box::new(handler));
    }

    /// Tracks the hovered row and emits enter/leave transitions.
    pub fn dispatch_pointer_move(&mut self, _x: f64, y: f64) {
        let bands = resolve_row_bands(self.visible_groups());
        let now = band_at_y(&bands, y).map(|band| band.group_id.clone());

        if now == self.hovered_group {
            return;
        }
        if let Some(previous) = self.hovered_group.take() {
            self.emit_event(ChartEvent::GroupLeave { group_id: previous });
        }
        if let Some(entered) = now.clone() {
            self.emit_event(ChartEvent::GroupEnter { group_id: entered });
        }
        self.hovered_group = now;
    }

    pub fn dispatch_pointer_leave(&mut self) {
        if let Some(previous) = self.hovered_group.take() {
            self.emit_event(ChartEvent::GroupLeave { group_id: previous });
        }
    }

    /// Emits a click with the row under the pointer and the clicked time.
    pub fn dispatch_click(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let Some(scale) = self.time_scale else {
            return Ok(());
        };
        let bands = resolve_row_bands(self.visible_groups());
        let Some(band) = band_at_y(&bands, y) else {
            return Ok(());
        };

        let plot_width = self.axis_widths.plot_width(f64::from(self.config.viewport.width));
        let time = scale.pixel_to_time(x - self.axis_widths.left, plot_width)?;
        let group_id = band.group_id.clone();
        self.emit_event(ChartEvent::Click { group_id, time });
        Ok(())
    }

    fn emit_event(&mut self, event: ChartEvent) {
        if let Some(handler) = &mut self.event_handler {
            handler(event);
        }
    }

    fn visible_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|group| group.visible)
    }

    fn run_layout_pass(&mut self, force_commit: bool) -> ChartResult<PassOutcome> {
        let viewport = self.config.viewport;
        let frame = RenderFrame::new(viewport);

        let visible: Vec<Group> = self.visible_groups().cloned().collect();
        let Some(time_scale) = self.time_scale else {
            return Ok(PassOutcome::Committed(frame));
        };
        if visible.is_empty() {
            return Ok(PassOutcome::Committed(frame));
        }

        let bands = resolve_row_bands(&visible);
        // All geometry in this pass is computed against the widths the pass
        // started with, even when the stored widths advance below.
        let pass_widths = self.axis_widths;
        let plot_width = pass_widths.plot_width(f64::from(viewport.width));
        let (window_start, window_end) = time_scale.padded_window(self.config.window_padding_ratio);

        // Window and sample every group against the padded visible range.
        let mut windowed: IndexMap<String, Vec<DataPoint>> = IndexMap::new();
        for group in &visible {
            let source = self.series.get(&group.id).map_or(&[][..], Vec::as_slice);
            let points = points_in_time_window(source, window_start, window_end);
            windowed.insert(group.id.clone(), sample_series(&points, group.sampling));
        }

        // X conversion; the shared mapping is stable for the rest of the pass.
        let mut screen_xs: IndexMap<String, Vec<f64>> = IndexMap::new();
        for (id, points) in &windowed {
            let xs = points
                .iter()
                .map(|point| {
                    time_scale
                        .time_to_pixel(point.x, plot_width)
                        .map(|px| px + pass_widths.left)
                })
                .collect::<ChartResult<Vec<f64>>>()?;
            screen_xs.insert(id.clone(), xs);
        }

        // Feed every group's range into its axis, then check gutter widths.
        self.left_axis.begin_pass();
        self.right_axis.begin_pass();
        let mut group_values: IndexMap<String, GroupScaleValues> = IndexMap::new();
        for group in &visible {
            let points = windowed.get(&group.id).map_or(&[][..], Vec::as_slice);
            let Some(values) = aggregate_group_values(group, points) else {
                // No visible points and no fixed bounds: the group is skipped.
                continue;
            };
            match group.axis {
                AxisSide::Left => self.left_axis.observe(values.range()),
                AxisSide::Right => self.right_axis.observe(values.range()),
            }
            group_values.insert(group.id.clone(), values);
        }

        let required = AxisWidths::new(
            self.left_axis
                .finalize(self.config.label_font_size_px)
                .required_width_px,
            self.right_axis
                .finalize(self.config.label_font_size_px)
                .required_width_px,
        );
        let decision = resolve_axis_relayout(pass_widths, required);
        if !decision.stable {
            if !force_commit {
                // Nothing from this pass survives; the frame built so far drops here.
                return Ok(PassOutcome::Aborted {
                    next_widths: decision.next,
                });
            }
            warn!(
                left = required.left,
                right = required.right,
                "axis width did not stabilize within the pass cap, committing anyway"
            );
            // Adopt the required widths so the next redraw starts converged.
            self.axis_widths = decision.next;
        }

        // Stacking rewrites eligible series in place and links top-shading.
        let mut shade_links = initial_shade_links(&visible);
        apply_stacking(&visible, &mut windowed, self.config.stack, &mut shade_links);

        // Y conversion per group within its row band.
        let mut projections: IndexMap<String, ProjectedSeries> = IndexMap::new();
        for (group, band) in visible.iter().zip(&bands) {
            let points = windowed.get(&group.id).map_or(&[][..], Vec::as_slice);
            let xs = screen_xs.get(&group.id).map_or(&[][..], Vec::as_slice);
            let projected = match group.style {
                GroupStyle::Band => project_band_series(points, xs, band)?,
                _ => {
                    let axis = match group.axis {
                        AxisSide::Left => &self.left_axis,
                        AxisSide::Right => &self.right_axis,
                    };
                    project_scalar_series(points, xs, axis, band)?
                }
            };
            projections.insert(group.id.clone(), projected);
        }

        let mut frame = frame;
        let visible_ids: Vec<String> = visible.iter().map(|group| group.id.clone()).collect();

        // Shading first so fills sit behind every path.
        for group in &visible {
            if !group.style.is_path() {
                continue;
            }
            if let Some(target) = resolve_shade_target(group, &shade_links, &visible_ids) {
                emit_shading(&mut frame, group, &projections, &target);
            }
        }

        for group in &visible {
            if let Some(projected) = projections.get(&group.id) {
                emit_series(&mut frame, group, projected, self.config.point_radius_px);
            }
        }

        self.emit_labels(&mut frame, &visible, &bands, &group_values, pass_widths);

        Ok(PassOutcome::Committed(frame))
    }

    fn emit_labels(
        &self,
        frame: &mut RenderFrame,
        visible: &[Group],
        bands: &[RowBand],
        group_values: &IndexMap<String, GroupScaleValues>,
        widths: AxisWidths,
    ) {
        for (group, band) in visible.iter().zip(bands) {
            let Some(values) = group_values.get(&group.id) else {
                continue;
            };
            let placed =
                place_group_labels(group, *values, band, self.config.label_char_height_px);

            let (x, class) = match group.axis {
                AxisSide::Left => (2.0, "rc-y-label rc-y-label-left"),
                AxisSide::Right => (
                    f64::from(self.config.viewport.width) - widths.right + 2.0,
                    "rc-y-label rc-y-label-right",
                ),
            };
            for label in placed {
                frame.push_label(LabelPrimitive::new(label.text, x, label.y, class));
            }
        }
    }
}
