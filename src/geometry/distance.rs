// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Point-to-segment distance, the ground truth for every "near a line" test.

use kurbo::Point;

/// Distance from `point` to the closest point on the segment `start..end`.
///
/// Projects `point` onto the line through the segment, clamps the projection
/// parameter to `[0, 1]`, and measures to the clamped foot. A zero-length
/// segment degrades to plain point-to-point distance.
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f64 {
    distance_to_segment_sq(point, start, end).sqrt()
}

/// Squared variant of [`distance_to_segment`].
pub fn distance_to_segment_sq(point: Point, start: Point, end: Point) -> f64 {
    let seg = end - start;
    let len_sq = seg.hypot2();
    if len_sq == 0.0 {
        return (point - start).hypot2();
    }

    let t = ((point - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    let foot = start + seg * t;
    (point - foot).hypot2()
}

/// Minimum distance from `point` to a polyline.
///
/// A single-point polyline is treated as a degenerate segment. Returns
/// `None` for an empty polyline.
pub fn distance_to_polyline(point: Point, polyline: &[Point]) -> Option<f64> {
    match polyline {
        [] => None,
        [only] => Some(point.distance(*only)),
        _ => polyline
            .windows(2)
            .map(|pair| distance_to_segment_sq(point, pair[0], pair[1]))
            .reduce(f64::min)
            .map(f64::sqrt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_projection_inside_segment() {
        let d = distance_to_segment(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < EPS);
    }

    #[test]
    fn test_projection_clamped_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        // Beyond the end: distance to b
        let d = distance_to_segment(Point::new(13.0, 4.0), a, b);
        assert!((d - 5.0).abs() < EPS);

        // Before the start: distance to a
        let d = distance_to_segment(Point::new(-6.0, -8.0), a, b);
        assert!((d - 10.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_segment_is_point_distance() {
        let a = Point::new(2.0, 2.0);
        for p in [
            Point::new(5.0, 6.0),
            Point::new(2.0, 2.0),
            Point::new(-1.5, 7.25),
        ] {
            let d = distance_to_segment(p, a, a);
            assert!((d - p.distance(a)).abs() < EPS);
        }
    }

    #[test]
    fn test_diagonal_segment() {
        // Distance from (10, 0) to the diagonal y = x is 10 / sqrt(2)
        let d = distance_to_segment(
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
        );
        assert!((d - 10.0 / 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_polyline_distance() {
        let line = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let d = distance_to_polyline(Point::new(12.0, 5.0), &line).unwrap();
        assert!((d - 2.0).abs() < EPS);

        let single = [Point::new(1.0, 1.0)];
        let d = distance_to_polyline(Point::new(4.0, 5.0), &single).unwrap();
        assert!((d - 5.0).abs() < EPS);

        assert!(distance_to_polyline(Point::ORIGIN, &[]).is_none());
    }
}
