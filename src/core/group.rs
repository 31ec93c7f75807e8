use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing style of one chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GroupStyle {
    #[default]
    Line,
    Trend,
    Bar,
    Point,
    /// Min–max range series drawn as centered bands ("arrow-avg").
    Band,
}

impl GroupStyle {
    /// Styles that participate in cumulative stacking.
    #[must_use]
    pub fn is_stackable(self) -> bool {
        matches!(self, Self::Line | Self::Trend)
    }

    /// Styles drawn as connected paths.
    #[must_use]
    pub fn is_path(self) -> bool {
        matches!(self, Self::Line | Self::Trend)
    }
}

/// Which value axis a group scales against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// What a shaded line group shades against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShadeOrientation {
    /// The group's own zero baseline.
    #[default]
    Own,
    /// The group stacked directly above in the eligible chain.
    Top,
    /// An explicitly named group's path.
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShadeOptions {
    pub enabled: bool,
    pub orientation: ShadeOrientation,
    #[serde(default)]
    pub group_id: Option<String>,
}

/// Per-group decimation policy applied after windowing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub enabled: bool,
    pub target_point_count: usize,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            target_point_count: 500,
        }
    }
}

/// Configuration of one chart row.
///
/// Groups own no data beyond configuration; point series are supplied per
/// redraw and windowed against the visible time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default)]
    pub style: GroupStyle,
    pub row_height: f64,
    #[serde(default)]
    pub axis: AxisSide,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub exclude_from_stacking: bool,
    #[serde(default)]
    pub shaded: ShadeOptions,
    /// Fixed scale bounds; when present they override computed ranges.
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    /// Fixed tick spacing in data units; enables the fitted tick ladder.
    #[serde(default)]
    pub interval_scale: Option<f64>,
    #[serde(default)]
    pub sampling: SamplingOptions,
}

fn default_visible() -> bool {
    true
}

impl Group {
    #[must_use]
    pub fn new(id: impl Into<String>, style: GroupStyle, row_height: f64) -> Self {
        Self {
            id: id.into(),
            style,
            row_height,
            axis: AxisSide::Left,
            visible: true,
            exclude_from_stacking: false,
            shaded: ShadeOptions::default(),
            min_value: None,
            max_value: None,
            interval_scale: None,
            sampling: SamplingOptions::default(),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_fixed_bounds(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = Some(min_value);
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_interval_scale(mut self, interval_scale: f64) -> Self {
        self.interval_scale = Some(interval_scale);
        self
    }

    #[must_use]
    pub fn with_shading(mut self, shaded: ShadeOptions) -> Self {
        self.shaded = shaded;
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "group id must not be empty".to_owned(),
            ));
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "group `{}` row height must be finite and > 0",
                self.id
            )));
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ChartError::InvalidData(format!(
                    "group `{}` fixed bounds must be finite with min <= max",
                    self.id
                )));
            }
        }
        if let Some(interval) = self.interval_scale {
            if !interval.is_finite() || interval <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "group `{}` interval scale must be finite and > 0",
                    self.id
                )));
            }
        }
        if self.shaded.enabled
            && self.shaded.orientation == ShadeOrientation::Group
            && self.shaded.group_id.is_none()
        {
            return Err(ChartError::InvalidData(format!(
                "group `{}` shading orientation `group` requires a target group id",
                self.id
            )));
        }
        Ok(())
    }
}
