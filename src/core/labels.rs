use smallvec::SmallVec;

use crate::core::value_axis::format_label_value;
use crate::core::{Group, GroupScaleValues, GroupStyle, RowBand};

/// One axis/group label with its vertical pixel position (label top).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub y: f64,
    pub text: String,
}

impl PlacedLabel {
    fn new(y: f64, value: f64) -> Self {
        Self {
            y,
            text: format_label_value(value),
        }
    }
}

pub type PlacedLabels = SmallVec<[PlacedLabel; 3]>;

/// Computes vertical label positions for one group's row band.
///
/// Groups declaring a fixed interval scale get a fitted tick ladder; other
/// groups get a min/avg/max arrangement at fractional offsets of the band
/// height. Never fails: a group without usable values simply places nothing
/// (the caller already skipped groups with no aggregate at all).
#[must_use]
pub fn place_group_labels(
    group: &Group,
    values: GroupScaleValues,
    band: &RowBand,
    char_height_px: f64,
) -> PlacedLabels {
    if group.interval_scale.is_some() {
        return place_tick_ladder(group, values, band, char_height_px);
    }

    match group.style {
        GroupStyle::Band => place_band_triple(values, band, char_height_px),
        _ => place_scalar_labels(values, band, char_height_px),
    }
}

/// Fractional anchor offsets inside a band: top, middle, bottom.
fn support_positions(band: &RowBand, char_height_px: f64) -> (f64, f64, f64) {
    let top = band.top;
    let middle = band.top + band.height() * 0.5 - char_height_px * 0.5;
    let bottom = band.bottom - char_height_px;
    (top, middle, bottom)
}

/// Max/avg/min triple for band-style groups.
fn place_band_triple(values: GroupScaleValues, band: &RowBand, char_height_px: f64) -> PlacedLabels {
    let (top, middle, bottom) = support_positions(band, char_height_px);

    let mut labels = PlacedLabels::new();
    labels.push(PlacedLabel::new(top, values.max_value));
    if let Some(avg) = values.avg_value {
        labels.push(PlacedLabel::new(middle, avg));
    }
    labels.push(PlacedLabel::new(bottom, values.min_value));
    labels
}

/// Max/min pair for plain series, collapsed to a single middle label when
/// the range is flat or an explicit average exists.
fn place_scalar_labels(
    values: GroupScaleValues,
    band: &RowBand,
    char_height_px: f64,
) -> PlacedLabels {
    let (top, middle, bottom) = support_positions(band, char_height_px);

    let mut labels = PlacedLabels::new();
    if values.min_value == values.max_value || values.avg_value.is_some() {
        let collapsed = values.avg_value.unwrap_or(values.max_value);
        labels.push(PlacedLabel::new(middle, collapsed));
    } else {
        labels.push(PlacedLabel::new(top, values.max_value));
        labels.push(PlacedLabel::new(bottom, values.min_value));
    }
    labels
}

/// Fitted tick ladder for groups declaring a fixed interval scale.
///
/// Starting from the raw tick count between min and max, the count is
/// halved and the interval doubled until the ticks fit the band's interior
/// at one label height each. Halving (instead of a single division)
/// guarantees termination and whole tick counts.
fn place_tick_ladder(
    group: &Group,
    values: GroupScaleValues,
    band: &RowBand,
    char_height_px: f64,
) -> PlacedLabels {
    let mut labels = PlacedLabels::new();
    let Some(raw_interval) = group.interval_scale else {
        return labels;
    };
    if char_height_px <= 0.0 {
        return labels;
    }

    let height = band.height();
    let intern_height = height - char_height_px * 2.0;
    let labels_that_fit = ((intern_height / char_height_px).floor() as i64).max(0);

    let mut interval = raw_interval;
    // Remove one tick: the max gets its own explicit label.
    let mut tick_count =
        ((values.max_value - values.min_value) / interval).floor() as i64 - 1;
    while tick_count > labels_that_fit && tick_count > 0 {
        tick_count = (tick_count - 1) / 2;
        interval += interval;
    }

    if values.min_value != values.max_value {
        labels.push(PlacedLabel::new(band.top, values.max_value));
        labels.push(PlacedLabel::new(band.bottom - char_height_px, values.min_value));
    } else if let Some(reference) = values.reference_line {
        // A flat range labels only an explicit reference value.
        labels.push(PlacedLabel::new(band.top + height * 0.5, reference));
    }

    if tick_count > 0 && labels_that_fit > 0 {
        let scale_distance = (values.max_value - values.min_value).abs();
        let interval_height =
            interval / scale_distance * (intern_height - tick_count as f64 * char_height_px);

        let mut position = band.bottom - char_height_px;
        let mut label_value = values.min_value;
        for _ in 0..tick_count {
            label_value += interval;
            position -= interval_height + char_height_px;
            labels.push(PlacedLabel::new(position, label_value));
        }
    }

    labels
}
