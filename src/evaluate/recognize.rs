// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape recognition for free drawing.
//!
//! This is a coverage heuristic, not shape matching: points are sampled
//! along the reference guide and the score is the share of samples that lie
//! under the child's ink. Orientation, mirroring, and stroke order are
//! invisible to it.

use super::{CoverageResult, CoverageTolerance, is_covered};
use crate::drawing::StrokeSession;
use crate::geometry::{ReferencePath, ScaledGeometry, TracePath, chord_length, chords, end_point};
use crate::settings;
use kurbo::{BezPath, Point};

/// Duplicate threshold when appending the path's end point as a sample
const DUPLICATE_EPSILON: f64 = 1e-6;

/// Score how well the strokes cover `sample_count` points along the reference.
///
/// A sample is covered when it lies within
/// `width / 2 * tolerance_multiplier + slack` of any stroke.
pub fn recognize_shape(
    reference: &ScaledGeometry<TracePath>,
    strokes: &StrokeSession,
    sample_count: usize,
    tolerance_multiplier: f64,
) -> CoverageResult {
    recognize_shape_with(
        reference,
        strokes,
        sample_count,
        CoverageTolerance::new(tolerance_multiplier, settings::recognition::SLACK),
        settings::curves::SUBDIVISIONS,
    )
}

/// [`recognize_shape`] with explicit tolerance and curve subdivision
pub fn recognize_shape_with(
    reference: &ScaledGeometry<TracePath>,
    strokes: &StrokeSession,
    sample_count: usize,
    tolerance: CoverageTolerance,
    curve_subdivisions: u32,
) -> CoverageResult {
    let Some(geometry) = reference.geometry() else {
        tracing::debug!("Shape recognition: no reference path, score is 0%");
        return CoverageResult::zero();
    };
    if strokes.is_empty() || geometry.is_empty() {
        return CoverageResult::zero();
    }

    let samples = sample_along(geometry.path(), sample_count, curve_subdivisions);
    let covered = samples
        .iter()
        .filter(|p| is_covered(**p, strokes, tolerance))
        .count();

    // The degenerate single-sample case divides by one, not by sample_count
    let result = CoverageResult::from_counts(covered, samples.len());
    tracing::debug!(
        "Shape recognition: sample points={}, covered={}, percentage={:.1}",
        samples.len(),
        covered,
        result.percentage
    );
    result
}

/// Sample up to `count` roughly equidistant points along a path.
///
/// Length is measured along straight chords. Samples sit at the centers of
/// `count` equal spans, starting half a span in. Rounding can leave the
/// walk short of `count` samples; the path's end point then fills in as the
/// last sample. A zero-length path yields its single end point.
pub fn sample_along(path: &BezPath, count: usize, curve_subdivisions: u32) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let total = chord_length(path, curve_subdivisions);
    if total <= 0.0 {
        return end_point(path).into_iter().collect();
    }

    let spacing = total / count as f64;
    let mut samples = Vec::with_capacity(count);
    // Distance still to travel, measured from the start of the current chord
    let mut remaining = spacing / 2.0;

    for chord in chords(path, curve_subdivisions) {
        let len = chord.length();
        while remaining <= len && samples.len() < count {
            samples.push(chord.point_at(remaining));
            remaining += spacing;
        }
        remaining -= len;
    }

    if samples.len() < count {
        if let Some(last) = end_point(path) {
            let duplicate = samples
                .last()
                .is_some_and(|prev: &Point| prev.distance(last) <= DUPLICATE_EPSILON);
            if !duplicate {
                samples.push(last);
            }
        }
    }

    samples.truncate(count);
    samples
}
