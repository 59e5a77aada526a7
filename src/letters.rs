// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Built-in letter geometry.
//!
//! Each letter has a hollow outline for the fill level and a guide path for
//! the trace and free-draw levels, authored in a nominal 0-100 box with y
//! pointing down (canvas orientation). Lookup is case-insensitive; letters
//! without data return `None`.

use crate::error::{Error, Result};
use crate::geometry::{Outline, TracePath};
use kurbo::BezPath;

/// Letters with built-in data, in menu order
pub const AVAILABLE_LETTERS: [&str; 2] = ["A", "B"];

/// Reference geometry for one letter
#[derive(Debug, Clone)]
pub struct LetterData {
    /// Uppercase letter identifier, e.g. "A"
    pub id: &'static str,
    /// Hollow outline for the fill level (even-odd, counters subtract)
    pub outline: Outline,
    /// Guide stroke(s) for the trace and free-draw levels
    pub trace_path: TracePath,
}

/// Look up a letter's data by identifier
pub fn letter_data(id: &str) -> Option<LetterData> {
    match id.trim().to_ascii_uppercase().as_str() {
        "A" => Some(LetterData {
            id: "A",
            outline: Outline::new(hollow_a()),
            trace_path: TracePath::new(trace_a()),
        }),
        "B" => Some(LetterData {
            id: "B",
            outline: Outline::new(hollow_b()),
            trace_path: TracePath::new(trace_b()),
        }),
        _ => None,
    }
}

impl LetterData {
    /// Like [`letter_data`], but unknown letters are an error
    pub fn require(id: &str) -> Result<Self> {
        letter_data(id).ok_or_else(|| Error::UnknownLetter(id.to_string()))
    }
}

// ===== A =====

/// Blocky A: two legs and a crossbar around a triangular counter
fn hollow_a() -> BezPath {
    let mut path = BezPath::new();

    // Outer contour
    path.move_to((50.0, 10.0));
    path.line_to((10.0, 90.0));
    path.line_to((30.0, 90.0));
    path.line_to((40.0, 70.0));
    path.line_to((60.0, 70.0));
    path.line_to((70.0, 90.0));
    path.line_to((90.0, 90.0));
    path.line_to((50.0, 10.0));
    path.close_path();

    // Counter
    path.move_to((50.0, 35.0));
    path.line_to((40.0, 60.0));
    path.line_to((60.0, 60.0));
    path.line_to((50.0, 35.0));
    path.close_path();

    path
}

/// A drawn as left leg, right leg, then crossbar
fn trace_a() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((50.0, 10.0));
    path.line_to((20.0, 90.0));
    path.move_to((50.0, 10.0));
    path.line_to((80.0, 90.0));
    path.move_to((35.0, 65.0));
    path.line_to((65.0, 65.0));
    path
}

// ===== B =====

/// B: a stem with two rounded bowls, each with its own counter
fn hollow_b() -> BezPath {
    let mut path = BezPath::new();

    // Outer contour
    path.move_to((20.0, 10.0));
    path.line_to((55.0, 10.0));
    path.quad_to((80.0, 10.0), (80.0, 30.0));
    path.quad_to((80.0, 45.0), (65.0, 50.0));
    path.quad_to((85.0, 55.0), (85.0, 72.0));
    path.quad_to((85.0, 90.0), (60.0, 90.0));
    path.line_to((20.0, 90.0));
    path.close_path();

    // Upper counter
    path.move_to((35.0, 22.0));
    path.line_to((55.0, 22.0));
    path.quad_to((65.0, 22.0), (65.0, 31.0));
    path.quad_to((65.0, 40.0), (55.0, 40.0));
    path.line_to((35.0, 40.0));
    path.close_path();

    // Lower counter
    path.move_to((35.0, 58.0));
    path.line_to((58.0, 58.0));
    path.quad_to((70.0, 58.0), (70.0, 68.0));
    path.quad_to((70.0, 78.0), (58.0, 78.0));
    path.line_to((35.0, 78.0));
    path.close_path();

    path
}

/// B drawn as the stem, then the upper bowl, then the lower bowl
fn trace_b() -> BezPath {
    let mut path = BezPath::new();

    path.move_to((27.0, 10.0));
    path.line_to((27.0, 90.0));

    path.move_to((27.0, 16.0));
    path.line_to((55.0, 16.0));
    path.quad_to((73.0, 16.0), (73.0, 31.0));
    path.quad_to((73.0, 48.0), (55.0, 49.0));
    path.line_to((27.0, 49.0));

    path.move_to((27.0, 49.0));
    path.line_to((58.0, 49.0));
    path.quad_to((78.0, 50.0), (78.0, 69.0));
    path.quad_to((78.0, 84.0), (58.0, 84.0));
    path.line_to((27.0, 84.0));

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ReferencePath;
    use kurbo::Point;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(letter_data("a").map(|d| d.id), Some("A"));
        assert_eq!(letter_data(" B ").map(|d| d.id), Some("B"));
        assert!(letter_data("Z").is_none());
        assert!(letter_data("").is_none());
    }

    #[test]
    fn test_require_unknown_letter() {
        assert!(matches!(LetterData::require("Q"), Err(Error::UnknownLetter(id)) if id == "Q"));
    }

    #[test]
    fn test_every_available_letter_has_data() {
        for id in AVAILABLE_LETTERS {
            let data = letter_data(id).unwrap();
            let bounds = data.outline.bounds().unwrap();
            assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
            assert!(bounds.x0 >= 0.0 && bounds.x1 <= 100.0);
            assert!(data.trace_path.length(1) > 0.0);
        }
    }

    #[test]
    fn test_a_counter_is_hollow() {
        let a = letter_data("A").unwrap();
        assert_eq!(a.outline.contour_count(), 2);
        // Left leg is solid
        assert!(a.outline.contains(Point::new(25.0, 80.0)));
        // Counter is not
        assert!(!a.outline.contains(Point::new(50.0, 50.0)));
        // Gap between the legs is not
        assert!(!a.outline.contains(Point::new(50.0, 85.0)));
    }

    #[test]
    fn test_b_has_two_counters() {
        let b = letter_data("B").unwrap();
        assert_eq!(b.outline.contour_count(), 3);
        assert!(b.outline.contains(Point::new(25.0, 50.0)));
        assert!(!b.outline.contains(Point::new(45.0, 31.0)));
        assert!(!b.outline.contains(Point::new(45.0, 68.0)));
        assert!(b.outline.contains(Point::new(45.0, 50.0)));
    }

    #[test]
    fn test_trace_guides_run_through_strokes() {
        let a = letter_data("A").unwrap();
        // The crossbar guide lies inside the filled crossbar region
        assert!(a.outline.contains(Point::new(50.0, 65.0)));
        assert!(a.trace_path.distance_to(Point::new(50.0, 65.0), 1).unwrap() < 1e-9);
    }
}
