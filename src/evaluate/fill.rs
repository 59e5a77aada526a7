// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Fill coverage: how much of the letter's interior has been colored in.

use super::{CoverageResult, CoverageTolerance, is_covered};
use crate::drawing::StrokeSession;
use crate::geometry::{GridSampler, Outline, ScaledGeometry};

/// Percentage of the outline's interior covered by ink.
///
/// Grid points `grid_step` apart over the outline's bounds are kept if they
/// pass the even-odd interior test (inside the outer contour, outside every
/// counter), and counted as covered if within half a stroke width of any
/// stroke segment.
pub fn fill_coverage(
    outline: &ScaledGeometry<Outline>,
    strokes: &StrokeSession,
    grid_step: f64,
) -> CoverageResult {
    fill_coverage_with(outline, strokes, grid_step, CoverageTolerance::EXACT)
}

/// [`fill_coverage`] with an explicit coverage tolerance
pub fn fill_coverage_with(
    outline: &ScaledGeometry<Outline>,
    strokes: &StrokeSession,
    grid_step: f64,
    tolerance: CoverageTolerance,
) -> CoverageResult {
    let (Some(geometry), Some(bounds)) = (outline.geometry(), outline.bounds()) else {
        tracing::debug!("Fill check: no outline, coverage is 0%");
        return CoverageResult::zero();
    };

    let mut inside = 0;
    let mut covered = 0;
    for point in GridSampler::new(bounds, grid_step) {
        if !geometry.contains(point) {
            continue;
        }
        inside += 1;
        if is_covered(point, strokes, tolerance) {
            covered += 1;
        }
    }

    let result = CoverageResult::from_counts(covered, inside);
    tracing::debug!(
        "Fill check: points inside={}, points covered={}, percentage={:.1}",
        inside,
        covered,
        result.percentage
    );
    result
}
