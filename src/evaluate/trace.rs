// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Trace coverage: how much of the guide line has been drawn over.
//!
//! Test points come from the guide, not from the ink, so scribbles away from
//! the guide cost nothing. Only leaving parts of the guide untraced lowers
//! the score.

use super::{CoverageResult, CoverageTolerance, is_covered};
use crate::drawing::StrokeSession;
use crate::geometry::{
    GridSampler, ReferencePath, ScaledGeometry, TracePath, chords, distance_to_segment_sq,
};
use crate::settings;

/// Percentage of the guide's on-path grid points covered by ink.
///
/// A grid point is on the path when it lies within `proximity` of a chord
/// of the guide. It is covered when it lies within half a stroke width plus
/// the trace slack of any stroke.
pub fn trace_coverage(
    trace: &ScaledGeometry<TracePath>,
    strokes: &StrokeSession,
    grid_step: f64,
    proximity: f64,
) -> CoverageResult {
    trace_coverage_with(
        trace,
        strokes,
        grid_step,
        proximity,
        CoverageTolerance::new(1.0, settings::trace::SLACK),
        settings::curves::SUBDIVISIONS,
    )
}

/// [`trace_coverage`] with explicit tolerance and curve subdivision
pub fn trace_coverage_with(
    trace: &ScaledGeometry<TracePath>,
    strokes: &StrokeSession,
    grid_step: f64,
    proximity: f64,
    tolerance: CoverageTolerance,
    curve_subdivisions: u32,
) -> CoverageResult {
    let (Some(geometry), Some(bounds)) = (trace.geometry(), trace.bounds()) else {
        tracing::debug!("Trace check: no guide path, coverage is 0%");
        return CoverageResult::zero();
    };
    if strokes.is_empty() {
        return CoverageResult::zero();
    }

    let guide = chords(geometry.path(), curve_subdivisions);
    let proximity_sq = proximity * proximity;
    let near_guide = |point| {
        guide
            .iter()
            .any(|c| distance_to_segment_sq(point, c.start, c.end) <= proximity_sq)
    };

    let mut on_path = 0;
    let mut covered = 0;
    for point in GridSampler::new(bounds, grid_step) {
        if !near_guide(point) {
            continue;
        }
        on_path += 1;
        if is_covered(point, strokes, tolerance) {
            covered += 1;
        }
    }

    let result = CoverageResult::from_counts(covered, on_path);
    tracing::debug!(
        "Trace check: points on path={}, points covered={}, percentage={:.1}",
        on_path,
        covered,
        result.percentage
    );
    result
}
