use crate::core::{DataPoint, SamplingOptions};

/// Thins a windowed series to at most `target_point_count` points.
///
/// Deterministic for identical input, never increases point count, and
/// always retains the first and last point of a non-empty series. Scalar
/// series keep their visual shape through largest-triangle-three-buckets
/// selection; band series fall back to stride decimation because they carry
/// no single y value to triangulate on.
#[must_use]
pub fn sample_series(points: &[DataPoint], options: SamplingOptions) -> Vec<DataPoint> {
    if !options.enabled {
        return points.to_vec();
    }
    sample_to_target(points, options.target_point_count)
}

#[must_use]
pub fn sample_to_target(points: &[DataPoint], target: usize) -> Vec<DataPoint> {
    if target == 0 || points.is_empty() {
        return Vec::new();
    }
    if points.len() <= target || points.len() <= 2 {
        return points.to_vec();
    }
    if target == 1 {
        return vec![points[0]];
    }
    if target == 2 {
        return vec![points[0], points[points.len() - 1]];
    }

    if points.iter().all(|point| point.is_scalar()) {
        largest_triangle_three_buckets(points, target)
    } else {
        stride_decimate(points, target)
    }
}

/// Largest-triangle-three-buckets over scalar y values.
///
/// First and last points are fixed; every interior bucket contributes the
/// point forming the largest triangle with the previously selected point
/// and the next bucket's average.
fn largest_triangle_three_buckets(points: &[DataPoint], target: usize) -> Vec<DataPoint> {
    let n = points.len();
    let bucket_size = (n - 2) as f64 / (target - 2) as f64;

    let mut sampled = Vec::with_capacity(target);
    sampled.push(points[0]);

    let mut selected = 0usize;
    for bucket in 0..(target - 2) {
        let start = (1.0 + bucket as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (bucket + 1) as f64 * bucket_size).floor() as usize).min(n - 1);

        let next_start = end.max(1);
        let next_end = ((1.0 + (bucket + 2) as f64 * bucket_size).floor() as usize)
            .min(n - 1)
            .max(next_start + 1);

        let mut avg_x = 0.0;
        let mut avg_y = 0.0;
        let mut count = 0usize;
        for point in &points[next_start..next_end] {
            avg_x += point.x;
            avg_y += point.y.unwrap_or(0.0);
            count += 1;
        }
        if count == 0 {
            avg_x = points[end].x;
            avg_y = points[end].y.unwrap_or(0.0);
            count = 1;
        }
        avg_x /= count as f64;
        avg_y /= count as f64;

        let anchor_x = points[selected].x;
        let anchor_y = points[selected].y.unwrap_or(0.0);

        let mut best_area = -1.0;
        let mut best_index = start;
        for (index, point) in points.iter().enumerate().take(end.max(start + 1)).skip(start) {
            let y = point.y.unwrap_or(0.0);
            let area = ((anchor_x - point.x) * (avg_y - anchor_y)
                - (anchor_x - avg_x) * (y - anchor_y))
                .abs();
            if area > best_area {
                best_area = area;
                best_index = index;
            }
        }

        sampled.push(points[best_index]);
        selected = best_index;
    }

    sampled.push(points[n - 1]);
    sampled
}

/// Keeps every k-th point, always including the endpoints.
fn stride_decimate(points: &[DataPoint], target: usize) -> Vec<DataPoint> {
    let n = points.len();
    let last = n - 1;
    // Interior slots after reserving both endpoints.
    let interior_slots = target - 2;

    let mut sampled = Vec::with_capacity(target);
    sampled.push(points[0]);
    for slot in 0..interior_slots {
        let ratio = (slot + 1) as f64 / (interior_slots + 1) as f64;
        let index = (ratio * last as f64).round() as usize;
        if index > 0 && index < last {
            sampled.push(points[index]);
        }
    }
    sampled.dedup_by(|a, b| a.x == b.x);
    sampled.push(points[last]);
    sampled
}
