// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Free-hand input: strokes, the stroke session, gesture capture, and the
//! session file format.

pub mod capture;
mod file;
pub mod stroke;

pub use capture::{Brush, GestureEvent, StrokeCapture};
pub use stroke::{Stroke, StrokeSession};
