// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Reference geometry for a letter: the fillable outline and the trace guide.
//!
//! Both wrap a `kurbo::BezPath` in a local coordinate space (nominally a
//! 0-100 box). `Outline` is tested by even-odd containment, so interior
//! counters subtract from the filled area regardless of winding direction.
//! `TracePath` is an open guide stroke that is only ever tested by
//! proximity and length, via the chords produced by [`chords`].

use kurbo::{Affine, BezPath, CubicBez, ParamCurve, PathEl, Point, QuadBez, Rect, Shape};

// ============================================================================
// SHARED BEHAVIOR
// ============================================================================

/// Geometry that can be fitted to a canvas and evaluated against strokes.
pub trait ReferencePath: Clone {
    /// The underlying path commands
    fn path(&self) -> &BezPath;

    /// A transformed copy of this geometry
    fn transformed(&self, affine: Affine) -> Self;

    /// True when the geometry has no path commands at all
    fn is_empty(&self) -> bool {
        self.path().elements().is_empty()
    }

    /// Tight bounds of the drawn geometry, `None` if there is nothing to bound
    fn bounds(&self) -> Option<Rect> {
        path_bounds(self.path())
    }
}

/// A straight chord between two anchor points of a path.
///
/// Curves are stood in for by the chord between their endpoints (or by
/// several chords when subdivided).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub start: Point,
    pub end: Point,
}

impl Chord {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Point at `distance` along the chord (clamped to the chord)
    pub fn point_at(&self, distance: f64) -> Point {
        let len = self.length();
        if len == 0.0 {
            return self.start;
        }
        self.start.lerp(self.end, (distance / len).clamp(0.0, 1.0))
    }
}

/// Walk a path as straight chords.
///
/// Lines and curves contribute a chord from the current point to their end
/// point; `ClosePath` contributes the chord back to the subpath start. With
/// `subdivisions > 1` each curve is split into that many chords by
/// evaluating the curve, instead of a single endpoint-to-endpoint chord.
pub fn chords(path: &BezPath, subdivisions: u32) -> Vec<Chord> {
    let pieces = subdivisions.max(1);
    let mut out = Vec::new();
    let mut current: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                current = Some(p);
                subpath_start = Some(p);
            }
            PathEl::LineTo(p) => {
                if let Some(start) = current {
                    out.push(Chord { start, end: p });
                }
                current = Some(p);
            }
            PathEl::QuadTo(p1, p2) => {
                if let Some(start) = current {
                    let quad = QuadBez::new(start, p1, p2);
                    push_curve_chords(&mut out, pieces, start, p2, |t| quad.eval(t));
                }
                current = Some(p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                if let Some(start) = current {
                    let cubic = CubicBez::new(start, p1, p2, p3);
                    push_curve_chords(&mut out, pieces, start, p3, |t| cubic.eval(t));
                }
                current = Some(p3);
            }
            PathEl::ClosePath => {
                if let (Some(start), Some(first)) = (current, subpath_start) {
                    out.push(Chord { start, end: first });
                }
                current = subpath_start;
            }
        }
    }

    out
}

fn push_curve_chords(
    out: &mut Vec<Chord>,
    pieces: u32,
    start: Point,
    end: Point,
    eval: impl Fn(f64) -> Point,
) {
    if pieces == 1 {
        out.push(Chord { start, end });
        return;
    }

    let mut prev = start;
    for i in 1..=pieces {
        // Pin the last piece to the exact end point
        let next = if i == pieces {
            end
        } else {
            eval(i as f64 / pieces as f64)
        };
        out.push(Chord { start: prev, end: next });
        prev = next;
    }
}

/// Total chord length of a path (curves measured as straight chords).
pub fn chord_length(path: &BezPath, subdivisions: u32) -> f64 {
    chords(path, subdivisions).iter().map(Chord::length).sum()
}

/// The path's current point after all commands have been applied.
///
/// After a `ClosePath` this is the start of the closed subpath.
pub fn end_point(path: &BezPath) -> Option<Point> {
    let mut current = None;
    let mut subpath_start = None;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                current = Some(p);
                subpath_start = Some(p);
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                current = Some(p);
            }
            PathEl::ClosePath => current = subpath_start,
        }
    }
    current
}

/// Tight bounds of a path, including lone move-to points.
fn path_bounds(path: &BezPath) -> Option<Rect> {
    let elements = path.elements();
    if elements.is_empty() {
        return None;
    }

    let has_segments = elements
        .iter()
        .any(|el| !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath));

    if has_segments {
        Some(path.bounding_box())
    } else {
        // Only move-to points: bound the anchors themselves
        elements
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) => Some(Rect::from_points(*p, *p)),
                _ => None,
            })
            .reduce(|a, b| a.union(b))
    }
}

// ============================================================================
// OUTLINE
// ============================================================================

/// A fillable letter outline: an outer contour plus optional counters.
///
/// Every subpath is closed on construction, so the interior test never sees
/// an open contour.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    path: BezPath,
}

impl Outline {
    /// Build an outline, closing any subpath that was left open
    pub fn new(path: BezPath) -> Self {
        Self {
            path: close_subpaths(&path),
        }
    }

    /// Number of closed contours (outer contour plus counters)
    pub fn contour_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::ClosePath))
            .count()
    }

    /// Even-odd interior test
    ///
    /// The winding number and the ray-crossing count always share parity,
    /// so an odd winding number means the point is inside an odd number of
    /// contours: inside the letter and outside its counters.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        self.path.winding(point).rem_euclid(2) == 1
    }
}

impl ReferencePath for Outline {
    fn path(&self) -> &BezPath {
        &self.path
    }

    fn transformed(&self, affine: Affine) -> Self {
        // Closed already; transforming preserves that
        Self {
            path: affine * self.path.clone(),
        }
    }
}

/// Copy `path`, inserting a `ClosePath` at the end of every open subpath.
fn close_subpaths(path: &BezPath) -> BezPath {
    let mut out = BezPath::new();
    let mut open = false;

    for el in path.elements() {
        match el {
            PathEl::MoveTo(_) => {
                if open {
                    out.push(PathEl::ClosePath);
                }
                open = true;
            }
            PathEl::ClosePath => open = false,
            _ => open = true,
        }
        out.push(*el);
    }

    if open {
        out.push(PathEl::ClosePath);
    }
    out
}

// ============================================================================
// TRACE PATH
// ============================================================================

/// A single guide stroke for tracing, possibly spanning several segments.
#[derive(Debug, Clone, Default)]
pub struct TracePath {
    path: BezPath,
}

impl TracePath {
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    /// Distance from `point` to the nearest chord of the guide
    pub fn distance_to(&self, point: Point, subdivisions: u32) -> Option<f64> {
        chords(&self.path, subdivisions)
            .iter()
            .map(|c| super::distance_to_segment(point, c.start, c.end))
            .reduce(f64::min)
    }

    /// Estimated length, curves measured as straight chords
    pub fn length(&self, subdivisions: u32) -> f64 {
        chord_length(&self.path, subdivisions)
    }
}

impl ReferencePath for TracePath {
    fn path(&self) -> &BezPath {
        &self.path
    }

    fn transformed(&self, affine: Affine) -> Self {
        Self {
            path: affine * self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((x0, y0));
        path.line_to((x1, y0));
        path.line_to((x1, y1));
        path.line_to((x0, y1));
        path.close_path();
        path
    }

    #[test]
    fn test_even_odd_hole_subtracts() {
        let mut path = square(0.0, 0.0, 100.0, 100.0);
        path.extend(square(25.0, 25.0, 75.0, 75.0));
        let outline = Outline::new(path);

        assert_eq!(outline.contour_count(), 2);
        assert!(outline.contains(Point::new(10.0, 10.0)));
        assert!(!outline.contains(Point::new(50.0, 50.0)));
        assert!(!outline.contains(Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_hole_direction_does_not_matter() {
        // Counter wound the opposite way from the outer contour
        let mut path = square(0.0, 0.0, 100.0, 100.0);
        let mut hole = BezPath::new();
        hole.move_to((25.0, 25.0));
        hole.line_to((25.0, 75.0));
        hole.line_to((75.0, 75.0));
        hole.line_to((75.0, 25.0));
        hole.close_path();
        path.extend(hole);

        let outline = Outline::new(path);
        assert!(!outline.contains(Point::new(50.0, 50.0)));
        assert!(outline.contains(Point::new(90.0, 50.0)));
    }

    #[test]
    fn test_open_subpaths_are_closed() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 0.0));
        path.line_to((100.0, 100.0));
        path.line_to((0.0, 100.0));
        path.move_to((200.0, 0.0));
        path.line_to((300.0, 0.0));
        path.line_to((300.0, 100.0));

        let outline = Outline::new(path);
        assert_eq!(outline.contour_count(), 2);
        assert!(outline.contains(Point::new(50.0, 50.0)));
        assert!(outline.contains(Point::new(290.0, 20.0)));
    }

    #[test]
    fn test_empty_outline_contains_nothing() {
        let outline = Outline::default();
        assert!(outline.is_empty());
        assert!(outline.bounds().is_none());
        assert!(!outline.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_chords_follow_anchors() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.quad_to((20.0, 10.0), (10.0, 20.0));
        path.curve_to((5.0, 30.0), (0.0, 30.0), (0.0, 20.0));
        path.close_path();

        let chords = chords(&path, 1);
        assert_eq!(chords.len(), 4);
        assert_eq!(chords[1].start, Point::new(10.0, 0.0));
        assert_eq!(chords[1].end, Point::new(10.0, 20.0));
        assert_eq!(chords[3].end, Point::new(0.0, 0.0));

        // 10 + 20 + 10 + 20
        assert!((chord_length(&path, 1) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_subdivided_curve_is_longer_than_chord() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.quad_to((50.0, 100.0), (100.0, 0.0));

        let chord = chord_length(&path, 1);
        let subdivided = chord_length(&path, 8);
        assert!((chord - 100.0).abs() < 1e-9);
        assert!(subdivided > chord);
        assert_eq!(chords(&path, 8).last().unwrap().end, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_end_point_after_close() {
        let path = square(5.0, 5.0, 10.0, 10.0);
        assert_eq!(end_point(&path), Some(Point::new(5.0, 5.0)));
        assert_eq!(end_point(&BezPath::new()), None);
    }

    #[test]
    fn test_bounds_of_single_point() {
        let mut path = BezPath::new();
        path.move_to((40.0, 60.0));
        let trace = TracePath::new(path);
        let bounds = trace.bounds().unwrap();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.origin(), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_trace_distance() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 0.0));
        let trace = TracePath::new(path);

        assert!((trace.distance_to(Point::new(50.0, 7.0), 1).unwrap() - 7.0).abs() < 1e-9);
        assert!((trace.length(1) - 100.0).abs() < 1e-9);
        assert!(TracePath::default().distance_to(Point::ORIGIN, 1).is_none());
    }
}
