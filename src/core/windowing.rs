use crate::core::DataPoint;

/// Returns points whose timestamp falls inside an inclusive time window.
///
/// Pure filter: preserves source order, never mutates the input, and is
/// idempotent when reapplied with the same bounds.
#[must_use]
pub fn points_in_time_window(points: &[DataPoint], start: f64, end: f64) -> Vec<DataPoint> {
    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    points
        .iter()
        .copied()
        .filter(|point| point.x >= min_t && point.x <= max_t)
        .collect()
}
