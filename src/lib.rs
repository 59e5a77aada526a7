// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! AlphaQuest: drawing evaluation for a children's letter-learning game

pub mod attempt;
pub mod cli;
pub mod config;
pub mod drawing;
pub mod error;
pub mod evaluate;
pub mod flow;
pub mod geometry;
pub mod letters;
pub mod progress;
pub mod settings;

pub use attempt::{AttemptState, Level, LevelAttempt};
pub use config::EvaluatorConfig;
pub use drawing::{Brush, GestureEvent, Stroke, StrokeCapture, StrokeSession};
pub use error::{Error, Result};
pub use evaluate::{CoverageResult, fill_coverage, recognize_shape, trace_coverage};
pub use flow::{LetterFlow, LetterFlowStep, is_letter_available};
pub use geometry::{Outline, ScaledGeometry, TracePath};
pub use letters::{LetterData, letter_data};
pub use progress::{JsonSettingsStore, MemorySettingsStore, SettingsStore, Thresholds, UserSettings};

use std::process::ExitCode;

/// Entry point for the `alphaquest` command
pub fn run() -> anyhow::Result<ExitCode> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var).
    // Logs go to stderr so stdout carries only the result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alphaquest=info".parse()?),
        )
        .init();

    cli::run()
}
