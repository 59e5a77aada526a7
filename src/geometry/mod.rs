// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry primitives shared by every evaluator.
//!
//! Reference shapes (`Outline`, `TracePath`) are authored in a nominal 0-100
//! box and fitted to the canvas with `ScaledGeometry`. All proximity tests
//! bottom out in `distance_to_segment`, and all area/length estimates
//! enumerate points with `GridSampler`.

pub mod distance;
pub mod fit;
pub mod grid;
pub mod outline;

pub use distance::{distance_to_polyline, distance_to_segment, distance_to_segment_sq};
pub use fit::{ScaledGeometry, fit};
pub use grid::GridSampler;
pub use outline::{Chord, Outline, ReferencePath, TracePath, chord_length, chords, end_point};
