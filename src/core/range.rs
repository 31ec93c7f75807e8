use ordered_float::OrderedFloat;

use crate::core::{DataPoint, Group, GroupStyle};

/// Closed numeric range, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Range over a slice of values; `None` when no finite value exists.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
            seen = true;
        }
        seen.then(|| Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.min == self.max
    }
}

/// Per-group aggregate feeding the value axes and label placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupScaleValues {
    pub min_value: f64,
    pub max_value: f64,
    /// Representative average: the first visible point's `avg_value`.
    pub avg_value: Option<f64>,
    /// Reference value of the first point carrying one.
    pub reference_line: Option<f64>,
}

impl GroupScaleValues {
    #[must_use]
    pub fn range(self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }
}

/// Computes a group's min/max/avg/reference aggregate over its windowed points.
///
/// Band-style groups take the envelope over `max_value`/`min_value`, except
/// that a point carrying a reference value contributes its `y` instead.
/// Fixed group bounds override the computed values. A group with zero
/// usable points and no fixed bounds contributes nothing; callers skip it.
#[must_use]
pub fn aggregate_group_values(group: &Group, points: &[DataPoint]) -> Option<GroupScaleValues> {
    let (computed_max, computed_min) = if group.style == GroupStyle::Band {
        let max = points
            .iter()
            .filter_map(|point| {
                if point.reference_line.is_some() {
                    point.y
                } else {
                    point.max_value
                }
            })
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner);
        let min = points
            .iter()
            .filter_map(|point| {
                if point.reference_line.is_some() {
                    point.y
                } else {
                    point.min_value
                }
            })
            .map(OrderedFloat)
            .min()
            .map(OrderedFloat::into_inner);
        (max, min)
    } else {
        let range = ValueRange::from_values(points.iter().filter_map(|point| point.y));
        (range.map(|r| r.max), range.map(|r| r.min))
    };

    let max_value = group.max_value.or(computed_max)?;
    let min_value = group.min_value.or(computed_min)?;

    let avg_value = points.first().and_then(|point| point.avg_value);
    let reference_line = points.iter().find_map(|point| point.reference_line);

    Some(GroupScaleValues {
        min_value: min_value.min(max_value),
        max_value: min_value.max(max_value),
        avg_value,
        reference_line,
    })
}
