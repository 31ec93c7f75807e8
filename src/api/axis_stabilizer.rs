/// Left/right value-axis gutter widths, whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisWidths {
    pub left: f64,
    pub right: f64,
}

impl AxisWidths {
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Plot area width remaining between the gutters.
    #[must_use]
    pub fn plot_width(self, viewport_width: f64) -> f64 {
        (viewport_width - self.left - self.right).max(1.0)
    }
}

/// Outcome of one axis-width stabilization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRelayoutDecision {
    /// When false the current pass must abort and re-run with `next`.
    pub stable: bool,
    pub next: AxisWidths,
}

/// Pure relayout decision: the widths a pass started with against the
/// widths its labels turned out to require.
///
/// Axis width affects plot width, which affects X positions, so layout must
/// reach a fixed point before any pixel is committed. Required widths are
/// whole pixels, making the fixed point exact for a fixed data snapshot.
#[must_use]
pub fn resolve_axis_relayout(previous: AxisWidths, required: AxisWidths) -> AxisRelayoutDecision {
    let stable = previous.left == required.left && previous.right == required.right;
    AxisRelayoutDecision {
        stable,
        next: required,
    }
}
