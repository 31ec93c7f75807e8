use crate::error::{ChartError, ChartResult};

/// Connected polyline for one group's path, in pixel space.
///
/// Primitives carry a CSS-style class tag instead of concrete paint: the
/// host rendering layer resolves class tags to visual style.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub group_id: String,
    pub points: Vec<(f64, f64)>,
    pub css_class: String,
    /// Closed fill path for shaded variants; open stroke otherwise.
    pub filled: bool,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(group_id: impl Into<String>, points: Vec<(f64, f64)>, css_class: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            points,
            css_class: css_class.into(),
            filled: false,
        }
    }

    #[must_use]
    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.is_empty() {
            return Err(ChartError::InvalidData(
                "path primitive must contain at least one point".to_owned(),
            ));
        }
        for (x, y) in &self.points {
            if !x.is_finite() || !y.is_finite() {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        validate_class(&self.css_class)
    }
}

/// Axis-aligned rectangle (bars, band intervals), in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub group_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub css_class: String,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        css_class: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            x,
            y,
            width,
            height,
            css_class: css_class.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect extent must be finite and >= 0".to_owned(),
            ));
        }
        validate_class(&self.css_class)
    }
}

/// Single point marker, in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPrimitive {
    pub group_id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub css_class: String,
}

impl PointPrimitive {
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        x: f64,
        y: f64,
        radius: f64,
        css_class: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            x,
            y,
            radius,
            css_class: css_class.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        validate_class(&self.css_class)
    }
}

/// Text label with absolute anchor position, in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub css_class: String,
}

impl LabelPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, css_class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            css_class: css_class.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "label primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "label coordinates must be finite".to_owned(),
            ));
        }
        validate_class(&self.css_class)
    }
}

fn validate_class(css_class: &str) -> ChartResult<()> {
    if css_class.is_empty() {
        return Err(ChartError::InvalidData(
            "primitive class tag must not be empty".to_owned(),
        ));
    }
    Ok(())
}
