use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LabelPrimitive, PathPrimitive, PointPrimitive, RectPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// An aborted layout pass drops its frame before it ever reaches a backend,
/// so no partially laid out scene is observable.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub points: Vec<PointPrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            rects: Vec::new(),
            points: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn push_path(&mut self, path: PathPrimitive) {
        self.paths.push(path);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_point(&mut self, point: PointPrimitive) {
        self.points.push(point);
    }

    pub fn push_label(&mut self, label: LabelPrimitive) {
        self.labels.push(label);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for point in &self.points {
            point.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.rects.is_empty()
            && self.points.is_empty()
            && self.labels.is_empty()
    }
}
