// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Regular grid of test points over a bounding box.

use kurbo::{Point, Rect};

/// Slack when deciding whether the last grid line lands on the far edge
const EDGE_EPSILON: f64 = 1e-9;

/// Largest grid sampled; anything bigger yields no points
const MAX_POINTS: usize = crate::settings::grid::MAX_POINTS;

/// Iterator over grid points spaced `step` apart, starting at the box's
/// minimum corner.
///
/// Grid lines are placed at `min + i * step` for every `i` that stays within
/// the box, including the far edge when it falls exactly on a grid line. A
/// box with zero height (a horizontal guide line) therefore still gets one
/// row of points. A non-finite or non-positive step yields no points, as
/// does a grid of more than `settings::grid::MAX_POINTS` points.
#[derive(Debug, Clone)]
pub struct GridSampler {
    origin: Point,
    step: f64,
    columns: usize,
    rows: usize,
    index: usize,
}

impl GridSampler {
    pub fn new(bounds: Rect, step: f64) -> Self {
        let bounds = bounds.abs();
        let valid = step.is_finite() && step > 0.0 && bounds.is_finite();
        if !valid {
            tracing::warn!("Invalid grid step {} over {:?}, no points sampled", step, bounds);
            return Self::empty(bounds.origin(), step);
        }

        let size = lines_along(bounds.width(), step).zip(lines_along(bounds.height(), step));
        let Some((columns, rows)) = size
            .filter(|(columns, rows)| columns.checked_mul(*rows).is_some_and(|n| n <= MAX_POINTS))
        else {
            tracing::warn!(
                "Grid step {} over {:?} exceeds {} points, no points sampled",
                step,
                bounds,
                MAX_POINTS
            );
            return Self::empty(bounds.origin(), step);
        };

        Self {
            origin: bounds.origin(),
            step,
            columns,
            rows,
            index: 0,
        }
    }

    fn empty(origin: Point, step: f64) -> Self {
        Self {
            origin,
            step,
            columns: 0,
            rows: 0,
            index: 0,
        }
    }

    /// Total number of points this grid yields
    pub fn point_count(&self) -> usize {
        // Bounded by MAX_POINTS at construction
        self.columns * self.rows
    }
}

/// Grid lines along one axis, `None` past `MAX_POINTS`
fn lines_along(extent: f64, step: f64) -> Option<usize> {
    let gaps = (extent / step + EDGE_EPSILON).floor();
    (gaps < MAX_POINTS as f64).then(|| gaps as usize + 1)
}

impl Iterator for GridSampler {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.point_count() {
            return None;
        }
        // Column-major, matching an x-outer / y-inner scan
        let col = self.index / self.rows;
        let row = self.index % self.rows;
        self.index += 1;
        Some(Point::new(
            self.origin.x + col as f64 * self.step,
            self.origin.y + row as f64 * self.step,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.point_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridSampler {}
