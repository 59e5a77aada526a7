// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Evaluation defaults and tuning constants.
//!
//! These are the built-in values behind `EvaluatorConfig`; a config file
//! can override the evaluator ones at runtime. Thresholds for passing a
//! level live in the user's settings record, not here.

use peniko::Color;

// ============================================================================
// FILL LEVEL
// ============================================================================
/// Grid spacing for fill coverage (canvas units)
///
/// Coarse enough to recompute on every stroke, fine enough for a believable
/// percentage on a phone-sized canvas.
const FILL_GRID_STEP: f64 = 15.0;

/// Extra reach added to the brush radius when testing fill coverage
const FILL_SLACK: f64 = 0.0;

/// Fraction of the canvas left empty around the fitted outline
const FILL_PADDING: f64 = 0.2; // uses 80% of the canvas

/// Brush diameter for the fill level (wide, for coloring in)
const FILL_BRUSH_WIDTH: f64 = 20.0;

// ============================================================================
// TRACE LEVEL
// ============================================================================
/// Grid spacing for trace coverage, denser than fill
const TRACE_GRID_STEP: f64 = 10.0;

/// How close a grid point must be to the guide to count as "on the path"
const TRACE_PROXIMITY: f64 = 5.0;

/// Extra reach added to the brush radius when testing trace coverage
const TRACE_SLACK: f64 = 2.0;

/// Fraction of the canvas left empty around the fitted guide
const TRACE_PADDING: f64 = 0.1; // uses 90% of the canvas

/// Brush diameter for tracing
const TRACE_BRUSH_WIDTH: f64 = 8.0;

// ============================================================================
// FREE DRAW LEVEL (SHAPE RECOGNITION)
// ============================================================================
/// Number of points sampled along the reference path
const RECOGNITION_SAMPLE_COUNT: usize = 20;

/// Brush radius multiplier; recognition forgives position more than tracing
const RECOGNITION_TOLERANCE_MULTIPLIER: f64 = 1.5;

/// Extra reach added after the multiplier
const RECOGNITION_SLACK: f64 = 2.0;

/// Fraction of the canvas left empty around the fitted reference
const FREE_DRAW_PADDING: f64 = 0.2;

/// Brush diameter for free drawing
const FREE_DRAW_BRUSH_WIDTH: f64 = 8.0;

// ============================================================================
// CURVES
// ============================================================================
/// Chords per curve segment when measuring guides
///
/// 1 measures every curve by the straight chord between its endpoints.
/// Higher values evaluate the curve and follow it more closely.
const CURVE_SUBDIVISIONS: u32 = 1;

// ============================================================================
// GRID
// ============================================================================
/// Smallest grid step a config may ask for (canvas units)
const MIN_GRID_STEP: f64 = 0.5;

/// Most test points one grid may hold; larger grids sample nothing
const MAX_GRID_POINTS: usize = 4_000_000;

// ============================================================================
// PROGRESS
// ============================================================================
/// Default pass threshold for every level (percent)
const DEFAULT_THRESHOLD: u8 = 80;

/// Default brush diameter when nothing else is selected
const DEFAULT_BRUSH_WIDTH: f64 = 5.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Fill level (level 1)
pub mod fill {
    pub const GRID_STEP: f64 = super::FILL_GRID_STEP;
    pub const SLACK: f64 = super::FILL_SLACK;
    pub const PADDING: f64 = super::FILL_PADDING;
    pub const BRUSH_WIDTH: f64 = super::FILL_BRUSH_WIDTH;
}

/// Trace level (level 2)
pub mod trace {
    pub const GRID_STEP: f64 = super::TRACE_GRID_STEP;
    pub const PROXIMITY: f64 = super::TRACE_PROXIMITY;
    pub const SLACK: f64 = super::TRACE_SLACK;
    pub const PADDING: f64 = super::TRACE_PADDING;
    pub const BRUSH_WIDTH: f64 = super::TRACE_BRUSH_WIDTH;
}

/// Free draw level (level 3)
pub mod recognition {
    pub const SAMPLE_COUNT: usize = super::RECOGNITION_SAMPLE_COUNT;
    pub const TOLERANCE_MULTIPLIER: f64 = super::RECOGNITION_TOLERANCE_MULTIPLIER;
    pub const SLACK: f64 = super::RECOGNITION_SLACK;
    pub const PADDING: f64 = super::FREE_DRAW_PADDING;
    pub const BRUSH_WIDTH: f64 = super::FREE_DRAW_BRUSH_WIDTH;
}

/// Curve approximation
pub mod curves {
    pub const SUBDIVISIONS: u32 = super::CURVE_SUBDIVISIONS;
}

/// Limits on sampling grids
pub mod grid {
    pub const MIN_STEP: f64 = super::MIN_GRID_STEP;
    pub const MAX_POINTS: usize = super::MAX_GRID_POINTS;
}

/// Defaults for the user's settings record
pub mod progress {
    pub const DEFAULT_THRESHOLD: u8 = super::DEFAULT_THRESHOLD;
}

/// Brush defaults and the palette offered to the child
pub mod brush {
    use super::Color;

    pub const DEFAULT_WIDTH: f64 = super::DEFAULT_BRUSH_WIDTH;

    pub const SKY_BLUE: Color = Color::from_rgb8(0x6e, 0xcf, 0xf6);
    pub const SUNNY_YELLOW: Color = Color::from_rgb8(0xff, 0xe0, 0x66);
    pub const CORAL_RED: Color = Color::from_rgb8(0xff, 0x6f, 0x61);
    pub const LEAF_GREEN: Color = Color::from_rgb8(0x8b, 0xc3, 0x4a);
    pub const LAVENDER: Color = Color::from_rgb8(0xb3, 0x9d, 0xdb);

    /// Palette order as shown in the color picker
    pub const PALETTE: [Color; 5] = [SKY_BLUE, SUNNY_YELLOW, CORAL_RED, LEAF_GREEN, LAVENDER];
}
