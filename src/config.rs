// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime evaluator configuration.
//!
//! Every field defaults to the constant in `settings`, so a config file only
//! needs the values it changes:
//!
//! ```toml
//! curve_subdivisions = 4
//!
//! [trace]
//! grid_step = 8.0
//! proximity = 6.0
//! ```

use crate::error::{Error, Result};
use crate::evaluate::CoverageTolerance;
use crate::settings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning for all three evaluators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub fill: FillConfig,
    pub trace: TraceConfig,
    pub recognition: RecognitionConfig,
    /// Chords per curve segment for trace proximity and recognition sampling
    pub curve_subdivisions: u32,
}

/// Fill coverage (level 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub grid_step: f64,
    pub slack: f64,
    pub padding: f64,
}

/// Trace coverage (level 2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub grid_step: f64,
    pub proximity: f64,
    pub slack: f64,
    pub padding: f64,
}

/// Shape recognition (level 3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    pub sample_count: usize,
    pub tolerance_multiplier: f64,
    pub slack: f64,
    pub padding: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            fill: FillConfig::default(),
            trace: TraceConfig::default(),
            recognition: RecognitionConfig::default(),
            curve_subdivisions: settings::curves::SUBDIVISIONS,
        }
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            grid_step: settings::fill::GRID_STEP,
            slack: settings::fill::SLACK,
            padding: settings::fill::PADDING,
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            grid_step: settings::trace::GRID_STEP,
            proximity: settings::trace::PROXIMITY,
            slack: settings::trace::SLACK,
            padding: settings::trace::PADDING,
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            sample_count: settings::recognition::SAMPLE_COUNT,
            tolerance_multiplier: settings::recognition::TOLERANCE_MULTIPLIER,
            slack: settings::recognition::SLACK,
            padding: settings::recognition::PADDING,
        }
    }
}

impl FillConfig {
    pub fn tolerance(&self) -> CoverageTolerance {
        CoverageTolerance::new(1.0, self.slack)
    }
}

impl TraceConfig {
    pub fn tolerance(&self) -> CoverageTolerance {
        CoverageTolerance::new(1.0, self.slack)
    }
}

impl RecognitionConfig {
    pub fn tolerance(&self) -> CoverageTolerance {
        CoverageTolerance::new(self.tolerance_multiplier, self.slack)
    }
}

impl EvaluatorConfig {
    /// Load from a TOML file
    ///
    /// A missing file is not an error: the defaults are used.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No evaluator config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml(&text).map_err(|e| match e {
            Error::Toml { source, .. } => Error::Toml {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!("Loaded evaluator config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| Error::Toml {
            path: "<inline>".into(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make evaluation meaningless
    pub fn validate(&self) -> Result<()> {
        check_grid_step("fill.grid_step", self.fill.grid_step)?;
        check_grid_step("trace.grid_step", self.trace.grid_step)?;
        check_non_negative("trace.proximity", self.trace.proximity)?;
        check_non_negative("fill.slack", self.fill.slack)?;
        check_non_negative("trace.slack", self.trace.slack)?;
        check_non_negative("recognition.slack", self.recognition.slack)?;
        check_positive(
            "recognition.tolerance_multiplier",
            self.recognition.tolerance_multiplier,
        )?;

        for (name, padding) in [
            ("fill.padding", self.fill.padding),
            ("trace.padding", self.trace.padding),
            ("recognition.padding", self.recognition.padding),
        ] {
            if !(0.0..1.0).contains(&padding) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be in [0, 1), got {padding}"
                )));
            }
        }

        if self.recognition.sample_count == 0 {
            return Err(Error::InvalidConfig(
                "recognition.sample_count must be at least 1".to_string(),
            ));
        }
        if self.curve_subdivisions == 0 {
            return Err(Error::InvalidConfig(
                "curve_subdivisions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be positive, got {value}")))
    }
}

fn check_grid_step(name: &str, value: f64) -> Result<()> {
    let min = settings::grid::MIN_STEP;
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be at least {min}, got {value}")))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{name} must be zero or positive, got {value}"
        )))
    }
}
