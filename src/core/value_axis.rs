use crate::core::{AxisSide, LinearScale, ValueRange};
use crate::error::ChartResult;

/// Extra horizontal room around axis label text inside the gutter.
const AXIS_GUTTER_PADDING_PX: f64 = 6.0;

/// Finalized axis layout requirement for one pass.
///
/// Passed by value through the stabilization step: the relayout decision is
/// a pure function of the width a pass started with and the width the pass
/// turned out to require.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    /// Gutter width the axis needs for its widest label, whole pixels.
    pub required_width_px: f64,
}

impl AxisState {
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            required_width_px: 0.0,
        }
    }
}

/// One of the two value axes (left/right gutter).
///
/// Accumulates candidate ranges over a pass, converts values into band
/// offsets, and reports the gutter width its labels require.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    side: AxisSide,
    accumulated: Option<ValueRange>,
}

impl ValueAxis {
    #[must_use]
    pub fn new(side: AxisSide) -> Self {
        Self {
            side,
            accumulated: None,
        }
    }

    #[must_use]
    pub fn side(&self) -> AxisSide {
        self.side
    }

    /// Clears the running min/max accumulator at the start of a pass.
    pub fn begin_pass(&mut self) {
        self.accumulated = None;
    }

    /// Feeds one group's range into the running accumulator.
    pub fn observe(&mut self, range: ValueRange) {
        self.accumulated = Some(match self.accumulated {
            Some(current) => ValueRange::new(current.min.min(range.min), current.max.max(range.max)),
            None => range,
        });
    }

    #[must_use]
    pub fn accumulated(&self) -> Option<ValueRange> {
        self.accumulated
    }

    /// Maps a value inside `range` to an upward pixel offset within `height_px`.
    pub fn convert_value(&self, value: f64, range: ValueRange, height_px: f64) -> ChartResult<f64> {
        LinearScale::new(range.min, range.max)?.value_to_offset(value, height_px)
    }

    /// Finalizes the gutter width this pass requires.
    ///
    /// The width follows the widest of the accumulated extreme labels; an
    /// axis that observed nothing is hidden and requires no width.
    #[must_use]
    pub fn finalize(&self, font_size_px: f64) -> AxisState {
        let Some(range) = self.accumulated else {
            return AxisState::hidden();
        };

        let min_label = format_label_value(range.min);
        let max_label = format_label_value(range.max);
        let widest = estimate_label_text_width_px(&min_label, font_size_px)
            .max(estimate_label_text_width_px(&max_label, font_size_px));

        AxisState {
            required_width_px: (widest + AXIS_GUTTER_PADDING_PX).ceil(),
        }
    }
}

/// Formats an axis/group label value, trimming insignificant zeros.
#[must_use]
pub fn format_label_value(value: f64) -> String {
    if !value.is_finite() {
        return String::from("-");
    }
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

/// Deterministic, backend-independent text width estimate.
#[must_use]
pub fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}
