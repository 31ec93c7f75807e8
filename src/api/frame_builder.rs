use indexmap::IndexMap;

use crate::core::{Group, GroupStyle, ProjectedSeries, ShadeTarget};
use crate::render::{PathPrimitive, PointPrimitive, RectPrimitive, RenderFrame};

/// Fallback bar extent when a series has a single visible point.
const DEFAULT_BAR_WIDTH_PX: f64 = 6.0;

fn series_class(base: &str, group: &Group) -> String {
    format!("{base} {base}-{}", group.id)
}

fn path_points(series: &ProjectedSeries) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .map(|point| (point.screen_x, point.screen_y))
        .collect()
}

/// Horizontal extent for bar/band rectangles, from the tightest spacing
/// between adjacent points.
fn bar_width_px(series: &ProjectedSeries) -> f64 {
    let mut tightest = f64::INFINITY;
    for pair in series.points.windows(2) {
        let delta = pair[1].screen_x - pair[0].screen_x;
        if delta > 0.0 {
            tightest = tightest.min(delta);
        }
    }
    if tightest.is_finite() {
        (tightest * 0.8).clamp(1.0, 50.0)
    } else {
        DEFAULT_BAR_WIDTH_PX
    }
}

/// Emits one group's shading fill, drawn before any path so fills always sit
/// behind lines.
pub(super) fn emit_shading(
    frame: &mut RenderFrame,
    group: &Group,
    projections: &IndexMap<String, ProjectedSeries>,
    target: &ShadeTarget,
) {
    let Some(own) = projections.get(&group.id) else {
        return;
    };
    if own.points.is_empty() {
        return;
    }

    let mut polygon = path_points(own);
    match target {
        ShadeTarget::OwnBaseline => {
            let first_x = own.points[0].screen_x;
            let last_x = own.points[own.points.len() - 1].screen_x;
            polygon.push((last_x, own.zero_y));
            polygon.push((first_x, own.zero_y));
        }
        ShadeTarget::Group(target_id) => {
            let Some(other) = projections.get(target_id) else {
                return;
            };
            if other.points.is_empty() {
                return;
            }
            polygon.extend(path_points(other).into_iter().rev());
        }
    }

    frame.push_path(PathPrimitive::new(&group.id, polygon, series_class("rc-shade", group)).filled());
}

/// Emits one group's series primitives, dispatching on the group style.
pub(super) fn emit_series(
    frame: &mut RenderFrame,
    group: &Group,
    series: &ProjectedSeries,
    point_radius_px: f64,
) {
    if series.points.is_empty() {
        return;
    }

    match group.style {
        GroupStyle::Line | GroupStyle::Trend => {
            frame.push_path(PathPrimitive::new(
                &group.id,
                path_points(series),
                series_class("rc-line", group),
            ));
        }
        GroupStyle::Bar => {
            let width = bar_width_px(series);
            let class = series_class("rc-bar", group);
            for point in &series.points {
                let top = point.screen_y.min(series.zero_y);
                let height = (series.zero_y - point.screen_y).abs();
                frame.push_rect(RectPrimitive::new(
                    &group.id,
                    point.screen_x - width / 2.0,
                    top,
                    width,
                    height,
                    class.clone(),
                ));
            }
        }
        GroupStyle::Point => {
            let class = series_class("rc-point", group);
            for point in &series.points {
                frame.push_point(PointPrimitive::new(
                    &group.id,
                    point.screen_x,
                    point.screen_y,
                    point_radius_px,
                    class.clone(),
                ));
            }
        }
        GroupStyle::Band => {
            let width = bar_width_px(series);
            let class = series_class("rc-band", group);
            for point in &series.points {
                let size = point.size.unwrap_or(0.0);
                frame.push_rect(RectPrimitive::new(
                    &group.id,
                    point.screen_x - width / 2.0,
                    point.screen_y - size / 2.0,
                    width,
                    size,
                    class.clone(),
                ));
            }
        }
    }
}
