// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! One attempt at one level of one letter.
//!
//! `LevelAttempt` ties the pieces together: it fits the letter to the
//! canvas, turns gestures into strokes, re-scores after every finished
//! stroke, and decides pass or fail when the child asks to check.

use crate::config::EvaluatorConfig;
use crate::drawing::{Brush, GestureEvent, Stroke, StrokeCapture, StrokeSession};
use crate::evaluate::{CoverageResult, fill_coverage_with, recognize_shape_with, trace_coverage_with};
use crate::geometry::{Outline, ScaledGeometry, TracePath};
use crate::letters::LetterData;
use crate::progress::Thresholds;
use crate::settings;
use kurbo::{Rect, Size};
use peniko::Color;

// ===== Level =====

/// The three drawing levels of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Color inside the outline
    Fill,
    /// Draw over the guide line
    Trace,
    /// Draw the letter without a visible guide
    FreeDraw,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Fill, Level::Trace, Level::FreeDraw];

    /// Level number as shown to the child, starting at 1
    pub fn number(self) -> u8 {
        match self {
            Level::Fill => 1,
            Level::Trace => 2,
            Level::FreeDraw => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.number() == number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Fill => "Fill the Letter",
            Level::Trace => "Trace the Letter",
            Level::FreeDraw => "Draw the Letter",
        }
    }

    /// Brush diameter a fresh attempt starts with
    pub fn brush_width(self) -> f64 {
        match self {
            Level::Fill => settings::fill::BRUSH_WIDTH,
            Level::Trace => settings::trace::BRUSH_WIDTH,
            Level::FreeDraw => settings::recognition::BRUSH_WIDTH,
        }
    }

    /// Brush a fresh attempt starts with
    pub fn default_brush(self) -> Brush {
        let color = match self {
            Level::Fill => settings::brush::SKY_BLUE,
            Level::Trace | Level::FreeDraw => Color::BLACK,
        };
        Brush::new(color, self.brush_width())
    }

    /// Padding used when fitting the letter to the canvas
    pub fn padding(self, config: &EvaluatorConfig) -> f64 {
        match self {
            Level::Fill => config.fill.padding,
            Level::Trace => config.trace.padding,
            Level::FreeDraw => config.recognition.padding,
        }
    }

    /// The pass threshold that applies to this level
    pub fn threshold(self, thresholds: &Thresholds) -> u8 {
        match self {
            Level::Fill => thresholds.fill,
            Level::Trace => thresholds.trace,
            Level::FreeDraw => thresholds.shape_recognition,
        }
    }
}

// ===== Attempt State =====

/// Where an attempt is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Accepting strokes
    Drawing,
    /// Scoring a check; never observable between calls
    Evaluating,
    /// Score met the threshold; no more strokes are accepted
    Passed,
    /// Score fell short; `retry` starts over
    Failed,
}

/// Reference geometry fitted for the attempt's level
#[derive(Debug, Clone)]
enum FittedGeometry {
    Outline(ScaledGeometry<Outline>),
    Guide(ScaledGeometry<TracePath>),
}

// ===== Level Attempt =====

/// A child's attempt at one level of one letter
#[derive(Debug, Clone)]
pub struct LevelAttempt {
    level: Level,
    letter: LetterData,
    config: EvaluatorConfig,
    fitted: FittedGeometry,
    capture: StrokeCapture,
    session: StrokeSession,
    result: CoverageResult,
    state: AttemptState,
}

impl LevelAttempt {
    /// Start an attempt with the level's default brush
    pub fn new(level: Level, letter: LetterData, config: EvaluatorConfig, canvas: Size) -> Self {
        let fitted = fit_letter(level, &letter, &config, canvas);
        tracing::info!(
            "Starting level {} for letter '{}' on {}x{} canvas",
            level.number(),
            letter.id,
            canvas.width,
            canvas.height
        );
        Self {
            level,
            letter,
            config,
            fitted,
            capture: StrokeCapture::new(level.default_brush()),
            session: StrokeSession::new(),
            result: CoverageResult::zero(),
            state: AttemptState::Drawing,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn letter(&self) -> &LetterData {
        &self.letter
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    /// Score after the most recent finished stroke, resize, or check
    pub fn result(&self) -> CoverageResult {
        self.result
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    pub fn live_stroke(&self) -> Option<&Stroke> {
        self.capture.live_stroke()
    }

    pub fn brush(&self) -> Brush {
        self.capture.brush()
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.capture.set_color(color);
    }

    pub fn set_brush_width(&mut self, width: f64) {
        self.capture.set_width(width);
    }

    /// Switch the brush to the next palette color
    pub fn next_brush_color(&mut self) -> Color {
        self.capture.next_palette_color()
    }

    pub fn canvas_size(&self) -> Size {
        match &self.fitted {
            FittedGeometry::Outline(scaled) => scaled.size(),
            FittedGeometry::Guide(scaled) => scaled.size(),
        }
    }

    /// The fitted outline, for the fill level
    pub fn outline(&self) -> Option<&ScaledGeometry<Outline>> {
        match &self.fitted {
            FittedGeometry::Outline(scaled) => Some(scaled),
            FittedGeometry::Guide(_) => None,
        }
    }

    /// The fitted guide, for the trace and free-draw levels
    pub fn guide(&self) -> Option<&ScaledGeometry<TracePath>> {
        match &self.fitted {
            FittedGeometry::Guide(scaled) => Some(scaled),
            FittedGeometry::Outline(_) => None,
        }
    }

    /// Bounds of the fitted reference in canvas coordinates
    pub fn reference_bounds(&self) -> Option<Rect> {
        match &self.fitted {
            FittedGeometry::Outline(scaled) => scaled.bounds(),
            FittedGeometry::Guide(scaled) => scaled.bounds(),
        }
    }

    /// Refit the letter to a new canvas size and re-score
    ///
    /// Existing strokes keep their canvas coordinates.
    pub fn resize(&mut self, canvas: Size) {
        if canvas == self.canvas_size() {
            return;
        }
        tracing::debug!("Canvas resized to {}x{}", canvas.width, canvas.height);
        self.fitted = fit_letter(self.level, &self.letter, &self.config, canvas);
        self.result = self.evaluate();
    }

    /// Feed one gesture event from the drawing surface
    ///
    /// Returns `true` when a stroke was finished and the score updated.
    /// Events are ignored unless the attempt is `Drawing`.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        if self.state != AttemptState::Drawing {
            tracing::debug!("Ignoring {:?} while {:?}", event, self.state);
            return false;
        }
        if !self.capture.handle(event, &mut self.session) {
            return false;
        }
        self.result = self.evaluate();
        tracing::debug!(
            "Stroke {} finished, score {:.1}%",
            self.session.len(),
            self.result.percentage
        );
        true
    }

    /// Add already finished strokes, e.g. a saved session, and re-score once
    ///
    /// Returns the number of strokes added; none are added unless `Drawing`.
    pub fn replay(&mut self, strokes: StrokeSession) -> usize {
        if self.state != AttemptState::Drawing {
            return 0;
        }
        let added = strokes
            .strokes()
            .iter()
            .filter(|stroke| self.session.push((*stroke).clone()))
            .count();
        self.result = self.evaluate();
        added
    }

    /// Score the current strokes without changing state
    pub fn evaluate(&self) -> CoverageResult {
        let config = &self.config;
        match &self.fitted {
            FittedGeometry::Outline(outline) => fill_coverage_with(
                outline,
                &self.session,
                config.fill.grid_step,
                config.fill.tolerance(),
            ),
            FittedGeometry::Guide(guide) if self.level == Level::Trace => trace_coverage_with(
                guide,
                &self.session,
                config.trace.grid_step,
                config.trace.proximity,
                config.trace.tolerance(),
                config.curve_subdivisions,
            ),
            FittedGeometry::Guide(guide) => recognize_shape_with(
                guide,
                &self.session,
                config.recognition.sample_count,
                config.recognition.tolerance(),
                config.curve_subdivisions,
            ),
        }
    }

    /// Score the attempt and decide pass or fail
    ///
    /// A stroke still in progress is finished first. Checking a decided
    /// attempt reports the existing decision.
    pub fn check(&mut self, thresholds: &Thresholds) -> AttemptState {
        if self.state != AttemptState::Drawing {
            return self.state;
        }

        self.capture.end(&mut self.session);
        self.state = AttemptState::Evaluating;
        self.result = self.evaluate();

        let threshold = self.level.threshold(thresholds);
        self.state = if self.result.passes(threshold) {
            AttemptState::Passed
        } else {
            AttemptState::Failed
        };

        tracing::info!(
            "Level {} for '{}': {:.1}% (threshold {}%), {:?}",
            self.level.number(),
            self.letter.id,
            self.result.percentage,
            threshold,
            self.state
        );
        self.state
    }

    /// Start over after a failed check
    ///
    /// Returns `false` (and does nothing) unless the attempt has failed.
    pub fn retry(&mut self) -> bool {
        if self.state != AttemptState::Failed {
            return false;
        }
        self.reset_drawing();
        self.state = AttemptState::Drawing;
        true
    }

    /// Erase all strokes while drawing
    pub fn clear(&mut self) {
        if self.state == AttemptState::Drawing {
            self.reset_drawing();
        }
    }

    fn reset_drawing(&mut self) {
        self.capture.cancel();
        self.session.clear();
        self.result = CoverageResult::zero();
    }
}

fn fit_letter(level: Level, letter: &LetterData, config: &EvaluatorConfig, canvas: Size) -> FittedGeometry {
    let padding = level.padding(config);
    match level {
        Level::Fill => FittedGeometry::Outline(ScaledGeometry::fit(&letter.outline, canvas, padding)),
        Level::Trace | Level::FreeDraw => {
            FittedGeometry::Guide(ScaledGeometry::fit(&letter.trace_path, canvas, padding))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ReferencePath;
    use crate::letters::letter_data;
    use kurbo::{PathEl, Point};

    const CANVAS: Size = Size::new(300.0, 300.0);

    fn attempt(letter: &str, level: Level) -> LevelAttempt {
        LevelAttempt::new(level, letter_data(letter).unwrap(), EvaluatorConfig::default(), CANVAS)
    }

    fn draw_line(attempt: &mut LevelAttempt, points: &[(f64, f64)]) -> bool {
        let mut iter = points.iter().map(|&(x, y)| Point::new(x, y));
        if let Some(first) = iter.next() {
            attempt.handle_gesture(GestureEvent::Began(first));
        }
        for point in iter {
            attempt.handle_gesture(GestureEvent::Moved(point));
        }
        attempt.handle_gesture(GestureEvent::Ended)
    }

    /// Draw every subpath of the fitted guide as its own stroke
    fn draw_guide(attempt: &mut LevelAttempt) {
        let path = attempt.guide().unwrap().geometry().unwrap().path().clone();
        let mut start = Point::ZERO;
        for el in path.elements() {
            let event = match *el {
                PathEl::MoveTo(p) => {
                    attempt.handle_gesture(GestureEvent::Ended);
                    start = p;
                    GestureEvent::Began(p)
                }
                PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                    GestureEvent::Moved(p)
                }
                PathEl::ClosePath => GestureEvent::Moved(start),
            };
            attempt.handle_gesture(event);
        }
        attempt.handle_gesture(GestureEvent::Ended);
    }

    /// Cover the whole canvas with wide horizontal strokes
    fn scribble_everywhere(attempt: &mut LevelAttempt) {
        attempt.set_brush_width(40.0);
        for i in 0..=30 {
            let y = i as f64 * 10.0;
            draw_line(attempt, &[(0.0, y), (300.0, y)]);
        }
    }

    #[test]
    fn test_level_numbers_and_defaults() {
        assert_eq!(Level::from_number(2), Some(Level::Trace));
        assert_eq!(Level::from_number(4), None);
        assert_eq!(Level::Fill.brush_width(), 20.0);
        assert_eq!(Level::Trace.brush_width(), 8.0);

        let config = EvaluatorConfig::default();
        assert_eq!(Level::Fill.padding(&config), 0.2);
        assert_eq!(Level::Trace.padding(&config), 0.1);

        let thresholds = Thresholds {
            fill: 10,
            trace: 20,
            shape_recognition: 30,
        };
        assert_eq!(Level::FreeDraw.threshold(&thresholds), 30);
    }

    #[test]
    fn test_letter_is_fitted_to_canvas() {
        let fill = attempt("A", Level::Fill);
        let bounds = fill.reference_bounds().unwrap();
        assert!(bounds.x0 >= 0.0 && bounds.x1 <= CANVAS.width);
        assert!(bounds.y0 >= 0.0 && bounds.y1 <= CANVAS.height);
        assert!(fill.outline().is_some());
        assert!(fill.guide().is_none());

        let trace = attempt("A", Level::Trace);
        assert!(trace.guide().is_some());
        assert_eq!(trace.canvas_size(), CANVAS);
    }

    #[test]
    fn test_fill_attempt_passes() {
        let mut fill = attempt("A", Level::Fill);
        scribble_everywhere(&mut fill);
        assert!((fill.result().percentage - 100.0).abs() < 1e-9);
        assert_eq!(fill.check(&Thresholds::default()), AttemptState::Passed);

        // Passed attempts take no more strokes
        assert!(!draw_line(&mut fill, &[(0.0, 0.0), (10.0, 10.0)]));
        assert_eq!(fill.session().len(), 31);
        assert!(!fill.retry());
    }

    #[test]
    fn test_every_stroke_rescores() {
        let mut trace = attempt("A", Level::Trace);
        assert_eq!(trace.result(), CoverageResult::zero());

        let guide = trace.guide().unwrap().geometry().unwrap().path().clone();
        let (apex, foot) = match guide.elements() {
            [PathEl::MoveTo(a), PathEl::LineTo(b), ..] => (*a, *b),
            other => panic!("unexpected guide {other:?}"),
        };
        assert!(draw_line(&mut trace, &[(apex.x, apex.y), (foot.x, foot.y)]));
        let partial = trace.result().percentage;
        assert!(partial > 0.0 && partial < 100.0);
    }

    #[test]
    fn test_trace_guide_passes() {
        let mut trace = attempt("A", Level::Trace);
        draw_guide(&mut trace);
        assert_eq!(trace.session().len(), 3);
        assert!((trace.result().percentage - 100.0).abs() < 1e-9);
        assert_eq!(trace.check(&Thresholds::default()), AttemptState::Passed);
    }

    #[test]
    fn test_free_draw_passes() {
        let mut free = attempt("B", Level::FreeDraw);
        draw_guide(&mut free);
        assert_eq!(free.check(&Thresholds::default()), AttemptState::Passed);
        assert!((free.result().percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_failed_attempt_retries() {
        let mut fill = attempt("A", Level::Fill);
        draw_line(&mut fill, &[(150.0, 200.0), (152.0, 200.0)]);
        assert_eq!(fill.check(&Thresholds::default()), AttemptState::Failed);

        // Strokes are refused until retry
        assert!(!draw_line(&mut fill, &[(0.0, 0.0), (10.0, 10.0)]));
        assert_eq!(fill.check(&Thresholds::default()), AttemptState::Failed);

        assert!(fill.retry());
        assert_eq!(fill.state(), AttemptState::Drawing);
        assert!(fill.session().is_empty());
        assert_eq!(fill.result(), CoverageResult::zero());

        scribble_everywhere(&mut fill);
        assert_eq!(fill.check(&Thresholds::default()), AttemptState::Passed);
    }

    #[test]
    fn test_check_finishes_live_stroke() {
        let mut fill = attempt("A", Level::Fill);
        fill.handle_gesture(GestureEvent::Began(Point::new(150.0, 150.0)));
        fill.handle_gesture(GestureEvent::Moved(Point::new(160.0, 160.0)));
        fill.check(&Thresholds::default());
        assert_eq!(fill.session().len(), 1);
        assert!(fill.live_stroke().is_none());
    }

    #[test]
    fn test_empty_attempt_fails() {
        let mut free = attempt("A", Level::FreeDraw);
        assert_eq!(free.check(&Thresholds::default()), AttemptState::Failed);
        assert_eq!(free.result().percentage, 0.0);
    }

    #[test]
    fn test_resize_refits_and_rescores() {
        let mut fill = attempt("A", Level::Fill);
        scribble_everywhere(&mut fill);
        assert!((fill.result().percentage - 100.0).abs() < 1e-9);

        // Strokes stay put; most of the refitted letter is now off the ink
        fill.resize(Size::new(1200.0, 1200.0));
        let bounds = fill.reference_bounds().unwrap();
        assert!(bounds.width() > 600.0);
        assert!(fill.result().percentage < 50.0);
        assert_eq!(fill.outline().unwrap().size(), Size::new(1200.0, 1200.0));
    }

    #[test]
    fn test_clear_only_while_drawing() {
        let mut fill = attempt("A", Level::Fill);
        scribble_everywhere(&mut fill);
        fill.clear();
        assert!(fill.session().is_empty());
        assert_eq!(fill.result().percentage, 0.0);

        scribble_everywhere(&mut fill);
        fill.check(&Thresholds::default());
        fill.clear();
        assert!(!fill.session().is_empty());
    }

    #[test]
    fn test_replay_saved_strokes() {
        let mut source = attempt("A", Level::Fill);
        scribble_everywhere(&mut source);

        let mut replayed = attempt("A", Level::Fill);
        assert_eq!(replayed.replay(source.session().clone()), 31);
        assert_eq!(replayed.result(), source.result());

        replayed.check(&Thresholds::default());
        assert_eq!(replayed.replay(source.session().clone()), 0);
    }

    #[test]
    fn test_default_brush_follows_level() {
        let mut fill = attempt("A", Level::Fill);
        assert_eq!(fill.brush().width, 20.0);
        // Fill starts on the first palette color
        assert_eq!(
            fill.next_brush_color().to_rgba8(),
            settings::brush::SUNNY_YELLOW.to_rgba8()
        );
        let trace = attempt("A", Level::Trace);
        assert_eq!(trace.brush().width, 8.0);
        assert!(trace.guide().unwrap().geometry().unwrap().path().elements().len() > 1);
    }
}
