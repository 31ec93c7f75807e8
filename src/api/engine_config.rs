use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Engine construction options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Cumulative stacking of eligible line/trend groups.
    pub stack: bool,
    /// Extra data windowed beyond each visible edge, as a fraction of the
    /// visible span. 1.0 pre-renders one viewport width of incoming scroll.
    pub window_padding_ratio: f64,
    pub label_font_size_px: f64,
    pub label_char_height_px: f64,
    pub point_radius_px: f64,
    /// Cap on abort-and-retry layout passes within one redraw.
    pub max_relayout_passes: usize,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            stack: false,
            window_padding_ratio: 1.0,
            label_font_size_px: 12.0,
            label_char_height_px: 16.0,
            point_radius_px: 3.0,
            max_relayout_passes: 4,
        }
    }

    #[must_use]
    pub fn with_stacking(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    #[must_use]
    pub fn with_window_padding_ratio(mut self, ratio: f64) -> Self {
        self.window_padding_ratio = ratio;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.window_padding_ratio.is_finite() || self.window_padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "window padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_char_height_px.is_finite() || self.label_char_height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label char height must be finite and > 0".to_owned(),
            ));
        }
        if !self.point_radius_px.is_finite() || self.point_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if self.max_relayout_passes == 0 {
            return Err(ChartError::InvalidData(
                "max relayout passes must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}
