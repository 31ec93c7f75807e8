use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::conversions::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One time-stamped record of a group's series.
///
/// Two shapes exist and a group's visible window uses exactly one of them:
/// scalar points carry `y`; band points carry `min_value`/`max_value` and
/// usually `avg_value`. `reference_line` marks a point whose `y` doubles as
/// the group's reference value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    pub x: f64,
    pub y: Option<f64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub avg_value: Option<f64>,
    pub reference_line: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn scalar(x: f64, y: f64) -> Self {
        Self {
            x,
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn band(x: f64, min_value: f64, max_value: f64, avg_value: f64) -> Self {
        Self {
            x,
            min_value: Some(min_value),
            max_value: Some(max_value),
            avg_value: Some(avg_value),
            ..Self::default()
        }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::scalar(
            datetime_to_unix_seconds(time),
            decimal_to_f64(value, "value")?,
        ))
    }

    #[must_use]
    pub fn with_reference_line(mut self, value: f64) -> Self {
        self.reference_line = Some(value);
        self
    }

    #[must_use]
    pub fn is_scalar(self) -> bool {
        self.y.is_some()
    }

    #[must_use]
    pub fn is_band(self) -> bool {
        self.min_value.is_some() && self.max_value.is_some()
    }
}

/// A data point annotated with its pixel position for the current pass.
///
/// Computed fresh every redraw and discarded once the frame is emitted;
/// never persisted across passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub point: DataPoint,
    pub screen_x: f64,
    pub screen_y: f64,
    /// Proportional on-screen extent for band points; `None` for scalar points.
    pub size: Option<f64>,
}
