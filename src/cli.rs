// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Command line front end: score a saved stroke session against a letter.

use crate::attempt::{AttemptState, Level, LevelAttempt};
use crate::config::EvaluatorConfig;
use crate::drawing::StrokeSession;
use crate::letters::LetterData;
use crate::progress::{JsonSettingsStore, SettingsStore};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use kurbo::Size;
use std::path::PathBuf;
use std::process::ExitCode;

/// Score a drawing of a letter the way the app does
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// letter to evaluate against, e.g. "A"
    pub letter: String,

    /// which level's evaluator to run
    #[arg(value_enum)]
    pub level: LevelArg,

    /// JSON file with the stroke session, in canvas coordinates
    pub strokes: PathBuf,

    /// canvas width the strokes were drawn on
    #[arg(long, default_value_t = 400.0)]
    pub width: f64,

    /// canvas height the strokes were drawn on
    #[arg(long, default_value_t = 400.0)]
    pub height: f64,

    /// TOML file overriding evaluator tuning
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON settings record with thresholds and progress
    #[arg(long, default_value = "alphaquest-settings.json")]
    pub settings: PathBuf,

    /// record the letter as completed when a free-draw attempt passes
    #[arg(long, default_value_t = false)]
    pub record: bool,
}

/// Level names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    #[value(alias = "1")]
    Fill,
    #[value(alias = "2")]
    Trace,
    #[value(alias = "3", alias = "draw")]
    FreeDraw,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Fill => Level::Fill,
            LevelArg::Trace => Level::Trace,
            LevelArg::FreeDraw => Level::FreeDraw,
        }
    }
}

/// Run one evaluation; `Ok(true)` when the attempt passes
pub fn execute(args: CliArgs) -> anyhow::Result<bool> {
    let letter = LetterData::require(&args.letter)?;
    let level = Level::from(args.level);

    let config = match &args.config {
        Some(path) => EvaluatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EvaluatorConfig::default(),
    };

    let canvas = Size::new(args.width, args.height);
    anyhow::ensure!(
        canvas.is_finite() && canvas.width > 0.0 && canvas.height > 0.0,
        "canvas size must be positive, got {}x{}",
        args.width,
        args.height
    );

    let session = StrokeSession::load(&args.strokes)
        .with_context(|| format!("Failed to load strokes {}", args.strokes.display()))?;

    let mut store = JsonSettingsStore::new(&args.settings);
    let thresholds = store.load_thresholds();

    let mut attempt = LevelAttempt::new(level, letter, config, canvas);
    attempt.replay(session);
    let state = attempt.check(&thresholds);
    let result = attempt.result();

    println!(
        "Letter {} level {} ({}): {:.1}% ({} of {} points), threshold {}%",
        attempt.letter().id,
        level.number(),
        level.title(),
        result.percentage,
        result.satisfied,
        result.tested,
        level.threshold(&thresholds)
    );

    if state != AttemptState::Passed {
        println!("Not yet, try again!");
        return Ok(false);
    }

    println!("Passed!");
    if args.record && level == Level::FreeDraw {
        store
            .save_completed_letter(attempt.letter().id)
            .context("Failed to record progress")?;
        println!("Letter {} completed", attempt.letter().id);
    }
    Ok(true)
}

/// Parse the command line and run, mapping the outcome to an exit code
pub fn run() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    tracing::debug!("{:?}", args);
    let passed = execute(args)?;
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
