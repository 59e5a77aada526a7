// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Coverage evaluators for the three drawing levels.
//!
//! Each evaluator picks a set of test points from the reference geometry
//! (grid points inside an outline, grid points near a guide, or samples
//! along a guide), then counts how many of them lie under the child's ink.
//! The result is `satisfied / tested` as a percentage.
//!
//! Evaluation is a pure function of the fitted geometry and the stroke
//! session: it never mutates either, and it never fails. Absent geometry,
//! an empty session, or zero test points all score 0%.

pub mod fill;
pub mod recognize;
pub mod trace;

pub use fill::{fill_coverage, fill_coverage_with};
pub use recognize::{recognize_shape, recognize_shape_with, sample_along};
pub use trace::{trace_coverage, trace_coverage_with};

use crate::drawing::StrokeSession;
use kurbo::Point;

/// Score from one evaluator run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoverageResult {
    /// Coverage in `[0, 100]`
    pub percentage: f64,
    /// Test points considered (inside, on-path, or sampled)
    pub tested: usize,
    /// Test points covered by ink
    pub satisfied: usize,
}

impl CoverageResult {
    /// Build from raw counts; zero tested points scores 0%, not NaN
    pub fn from_counts(satisfied: usize, tested: usize) -> Self {
        let percentage = if tested == 0 {
            0.0
        } else {
            satisfied as f64 / tested as f64 * 100.0
        };
        Self {
            percentage,
            tested,
            satisfied,
        }
    }

    /// Nothing to test, or nothing drawn
    pub fn zero() -> Self {
        Self::default()
    }

    /// Whether this score meets a percentage threshold
    pub fn passes(&self, threshold: u8) -> bool {
        self.percentage >= f64::from(threshold)
    }
}

/// How far from a stroke's center line a point still counts as covered.
///
/// The reach is `width / 2 * multiplier + slack`: the brush radius, scaled
/// for levels that forgive position, plus a fixed buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageTolerance {
    pub multiplier: f64,
    pub slack: f64,
}

impl CoverageTolerance {
    /// Exactly the painted brush radius
    pub const EXACT: Self = Self::new(1.0, 0.0);

    pub const fn new(multiplier: f64, slack: f64) -> Self {
        Self { multiplier, slack }
    }

    /// Reach for a stroke of the given width
    pub fn radius(&self, stroke_width: f64) -> f64 {
        stroke_width / 2.0 * self.multiplier + self.slack
    }
}

impl Default for CoverageTolerance {
    fn default() -> Self {
        Self::EXACT
    }
}

/// True if any stroke in the session covers `point`.
///
/// Each stroke is tested with its own width, so strokes drawn with
/// different brushes reach differently.
pub fn is_covered(point: Point, strokes: &StrokeSession, tolerance: CoverageTolerance) -> bool {
    strokes
        .iter()
        .any(|stroke| stroke.is_within(point, tolerance.radius(stroke.width())))
}
