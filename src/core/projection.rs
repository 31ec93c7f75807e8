use crate::core::{DataPoint, RowBand, ScreenPoint, ValueAxis, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Vertical padding reserved at the top and bottom of every row band.
pub const ROW_PADDING_PX: f64 = 10.0;

/// A group's series after Y conversion for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSeries {
    pub points: Vec<ScreenPoint>,
    /// Baseline pixel used by bar and area rendering.
    pub zero_y: f64,
}

fn inner_band_height(band: &RowBand) -> f64 {
    (band.height() - 2.0 * ROW_PADDING_PX).max(1.0)
}

/// Converts a scalar series' (possibly stacked) values into screen Y.
///
/// The range is computed over the series itself; a flat range maps every
/// point to the band midpoint instead of dividing by a zero span. Points of
/// the wrong shape are skipped rather than failing the pass.
pub fn project_scalar_series(
    points: &[DataPoint],
    screen_xs: &[f64],
    axis: &ValueAxis,
    band: &RowBand,
) -> ChartResult<ProjectedSeries> {
    if points.len() != screen_xs.len() {
        return Err(ChartError::InvalidData(
            "screen x count must match point count".to_owned(),
        ));
    }

    let inner = inner_band_height(band);
    let baseline = band.bottom - ROW_PADDING_PX;

    let range = ValueRange::from_values(points.iter().filter_map(|point| point.y));
    let Some(range) = range else {
        return Ok(ProjectedSeries {
            points: Vec::new(),
            zero_y: band.midpoint().round(),
        });
    };

    let mut projected = Vec::with_capacity(points.len());
    for (point, &screen_x) in points.iter().zip(screen_xs) {
        let Some(y) = point.y else {
            debug_assert!(false, "scalar series contains a non-scalar point");
            continue;
        };

        let offset = if range.is_flat() {
            (inner * 0.5).round()
        } else {
            axis.convert_value(y, range, inner)?.round()
        };

        projected.push(ScreenPoint {
            point: *point,
            screen_x,
            screen_y: baseline - offset,
            size: None,
        });
    }

    let zero_offset = if range.is_flat() {
        (inner * 0.5).round()
    } else {
        axis.convert_value(range.min, range, inner)?.round()
    };

    Ok(ProjectedSeries {
        points: projected,
        zero_y: baseline - zero_offset,
    })
}

/// Converts a band series into midpoint-pinned screen points.
///
/// Every point sits at the row midpoint; its visual size is the fraction of
/// the group's overall min–max spread covered by the point's own interval,
/// scaled to the band's inner height and clamped at zero.
pub fn project_band_series(
    points: &[DataPoint],
    screen_xs: &[f64],
    band: &RowBand,
) -> ChartResult<ProjectedSeries> {
    if points.len() != screen_xs.len() {
        return Err(ChartError::InvalidData(
            "screen x count must match point count".to_owned(),
        ));
    }

    let inner = inner_band_height(band);
    let baseline = band.bottom - ROW_PADDING_PX;
    let midpoint_y = baseline - (inner * 0.5).round();

    let max_range = ValueRange::from_values(points.iter().filter_map(|point| point.max_value));
    let min_range = ValueRange::from_values(points.iter().filter_map(|point| point.min_value));
    let global_span = match (max_range, min_range) {
        (Some(max_range), Some(min_range)) => max_range.max - min_range.min,
        _ => 0.0,
    };

    let mut projected = Vec::with_capacity(points.len());
    for (point, &screen_x) in points.iter().zip(screen_xs) {
        let (Some(min_value), Some(max_value)) = (point.min_value, point.max_value) else {
            debug_assert!(false, "band series contains a non-band point");
            continue;
        };

        let size = if global_span > 0.0 {
            let spread = max_value - min_value;
            ((spread / global_span) * inner - ROW_PADDING_PX).max(0.0)
        } else {
            0.0
        };

        projected.push(ScreenPoint {
            point: *point,
            screen_x,
            screen_y: midpoint_y,
            size: Some(size),
        });
    }

    Ok(ProjectedSeries {
        points: projected,
        zero_y: midpoint_y,
    })
}
