// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Turning gesture events into strokes.
//!
//! The input surface reports begin / move / end events in canvas
//! coordinates. `StrokeCapture` owns the one live stroke while a gesture is
//! in progress and hands it to the session when the gesture ends. Point
//! throttling and smoothing happen upstream, if at all.

use super::stroke::{Stroke, StrokeSession};
use crate::settings::brush::PALETTE;
use kurbo::Point;
use peniko::Color;

/// A gesture event from the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Finger or pointer went down
    Began(Point),
    /// Finger or pointer moved while down
    Moved(Point),
    /// Finger or pointer lifted
    Ended,
    /// Gesture interrupted by the system; the live stroke is dropped
    Cancelled,
}

/// Brush settings applied to the next stroke
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    pub color: Color,
    pub width: f64,
}

impl Brush {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Color::BLACK, crate::settings::brush::DEFAULT_WIDTH)
    }
}

/// Builds strokes from gesture events
#[derive(Debug, Clone, Default)]
pub struct StrokeCapture {
    brush: Brush,
    live: Option<Stroke>,
}

impl StrokeCapture {
    pub fn new(brush: Brush) -> Self {
        Self { brush, live: None }
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Change the brush for subsequent strokes
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn set_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    pub fn set_width(&mut self, width: f64) {
        self.brush.width = width;
    }

    /// Switch to the next palette color and return it
    ///
    /// A brush color outside the palette moves to the first palette color.
    pub fn next_palette_color(&mut self) -> Color {
        let current = self.brush.color.to_rgba8();
        let next = PALETTE
            .iter()
            .position(|c| c.to_rgba8() == current)
            .map_or(0, |i| (i + 1) % PALETTE.len());
        self.brush.color = PALETTE[next];
        self.brush.color
    }

    /// The stroke currently being drawn, if any
    pub fn live_stroke(&self) -> Option<&Stroke> {
        self.live.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.live.is_some()
    }

    /// Feed one gesture event
    ///
    /// Returns `true` when a stroke was finalized into `session`.
    pub fn handle(&mut self, event: GestureEvent, session: &mut StrokeSession) -> bool {
        match event {
            GestureEvent::Began(point) => self.begin(point, session),
            GestureEvent::Moved(point) => {
                self.extend(point);
                false
            }
            GestureEvent::Ended => self.end(session),
            GestureEvent::Cancelled => {
                self.cancel();
                false
            }
        }
    }

    /// Start a new stroke at `point` with the current brush
    ///
    /// A stroke that is still live (a missed end event) is finalized first;
    /// the return value reports whether that happened.
    pub fn begin(&mut self, point: Point, session: &mut StrokeSession) -> bool {
        let finalized = self.end(session);
        let mut stroke = Stroke::new(self.brush.color, self.brush.width);
        stroke.push(point);
        self.live = Some(stroke);
        finalized
    }

    /// Append a point to the live stroke
    ///
    /// A move without a preceding begin starts a stroke, as touch surfaces
    /// sometimes deliver the first move before the begin.
    pub fn extend(&mut self, point: Point) {
        let brush = self.brush;
        self.live
            .get_or_insert_with(|| Stroke::new(brush.color, brush.width))
            .push(point);
    }

    /// Finalize the live stroke into `session`
    ///
    /// Empty strokes are discarded. Returns `true` if a stroke was added.
    pub fn end(&mut self, session: &mut StrokeSession) -> bool {
        match self.live.take() {
            Some(stroke) => session.push(stroke),
            None => false,
        }
    }

    /// Drop the live stroke without finalizing it
    pub fn cancel(&mut self) {
        if self.live.take().is_some() {
            tracing::debug!("Live stroke cancelled");
        }
    }
}
