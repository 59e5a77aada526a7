// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! User-drawn strokes and the per-attempt stroke session.

use crate::geometry::distance_to_polyline;
use kurbo::{Point, Rect};
use peniko::Color;

/// A polyline drawn in one gesture, with the brush it was drawn with.
///
/// Color and width are captured when the gesture begins; changing the brush
/// afterwards does not touch strokes already on the canvas.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    /// Brush diameter in canvas units
    width: f64,
    /// Bounding box of `points`, kept current as points are added
    bounds: Option<Rect>,
}

impl Stroke {
    /// An empty stroke with the given brush
    pub fn new(color: Color, width: f64) -> Self {
        Self::from_points(Vec::new(), color, width)
    }

    /// A complete stroke, e.g. one loaded from a saved session
    pub fn from_points(points: Vec<Point>, color: Color, width: f64) -> Self {
        let bounds = points.iter().fold(None, |bounds, p| Some(grow(bounds, *p)));
        Self {
            points,
            color,
            // NaN and negative widths draw nothing
            width: width.max(0.0),
            bounds,
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
        self.bounds = Some(grow(self.bounds, point));
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the stroke's center line
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Distance from `point` to the stroke's center line
    pub fn distance_to(&self, point: Point) -> Option<f64> {
        distance_to_polyline(point, &self.points)
    }

    /// True if `point` lies within `radius` of the stroke's center line
    ///
    /// Points outside the stroke's bounds inflated by `radius` are rejected
    /// before any segment is measured.
    pub fn is_within(&self, point: Point, radius: f64) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        // Inclusive on every edge; Rect::contains excludes the far edges
        let reach = bounds.inflate(radius, radius);
        if point.x < reach.x0 || point.x > reach.x1 || point.y < reach.y0 || point.y > reach.y1 {
            return false;
        }
        self.distance_to(point).is_some_and(|d| d <= radius)
    }
}

fn grow(bounds: Option<Rect>, point: Point) -> Rect {
    match bounds {
        Some(rect) => rect.union_pt(point),
        None => Rect::from_points(point, point),
    }
}

/// All finalized strokes for one attempt at one level.
///
/// Cleared wholesale on retry. Strokes enter only through
/// [`StrokeSession::push`], which drops empty strokes.
#[derive(Debug, Clone, Default)]
pub struct StrokeSession {
    strokes: Vec<Stroke>,
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize a stroke into the session
    ///
    /// Returns `false` (and discards the stroke) if it has no points.
    pub fn push(&mut self, stroke: Stroke) -> bool {
        if stroke.is_empty() {
            tracing::debug!("Discarding empty stroke");
            return false;
        }
        self.strokes.push(stroke);
        true
    }

    /// Remove every stroke (retry)
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Number of captured points across all strokes
    pub fn total_points(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}

impl FromIterator<Stroke> for StrokeSession {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        let mut session = Self::new();
        for stroke in iter {
            session.push(stroke);
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)], width: f64) -> Stroke {
        Stroke::from_points(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            Color::BLACK,
            width,
        )
    }

    #[test]
    fn test_stroke_bounds() {
        let stroke = line(&[(10.0, 5.0), (0.0, 20.0), (4.0, 1.0)], 5.0);
        assert_eq!(stroke.bounds(), Some(Rect::new(0.0, 1.0, 10.0, 20.0)));
        assert_eq!(Stroke::new(Color::BLACK, 5.0).bounds(), None);
    }

    #[test]
    fn test_bounds_follow_pushed_points() {
        let mut stroke = Stroke::new(Color::BLACK, 5.0);
        stroke.push(Point::new(3.0, 4.0));
        assert_eq!(stroke.bounds(), Some(Rect::new(3.0, 4.0, 3.0, 4.0)));
        stroke.push(Point::new(-2.0, 9.0));
        stroke.push(Point::new(1.0, 0.0));
        assert_eq!(stroke.bounds(), Some(Rect::new(-2.0, 0.0, 3.0, 9.0)));

        // The prefilter sees the latest extent
        assert!(stroke.is_within(Point::new(-2.0, 9.0), 0.5));
        assert!(!stroke.is_within(Point::new(-4.0, 9.0), 0.5));
    }

    #[test]
    fn test_is_within_uses_segments() {
        let stroke = line(&[(0.0, 0.0), (100.0, 0.0)], 10.0);
        // Midway along the segment, far from either captured point
        assert!(stroke.is_within(Point::new(50.0, 4.0), 5.0));
        assert!(!stroke.is_within(Point::new(50.0, 6.0), 5.0));
        assert!(!stroke.is_within(Point::new(200.0, 0.0), 5.0));
    }

    #[test]
    fn test_single_point_stroke() {
        let stroke = line(&[(10.0, 10.0)], 4.0);
        assert!(stroke.is_within(Point::new(12.0, 10.0), 2.0));
        assert!(!stroke.is_within(Point::new(13.0, 10.0), 2.0));
    }

    #[test]
    fn test_negative_width_clamped() {
        assert_eq!(line(&[(0.0, 0.0)], -3.0).width(), 0.0);
        assert_eq!(line(&[(0.0, 0.0)], f64::NAN).width(), 0.0);
    }

    #[test]
    fn test_session_discards_empty_strokes() {
        let mut session = StrokeSession::new();
        assert!(!session.push(Stroke::new(Color::BLACK, 5.0)));
        assert!(session.push(line(&[(0.0, 0.0), (1.0, 1.0)], 5.0)));
        assert_eq!(session.len(), 1);
        assert_eq!(session.total_points(), 2);

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_session_from_iter() {
        let session: StrokeSession = [
            line(&[(0.0, 0.0)], 1.0),
            Stroke::new(Color::BLACK, 1.0),
            line(&[(1.0, 1.0), (2.0, 2.0)], 1.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(session.len(), 2);
    }
}
