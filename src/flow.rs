// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! The sequence of screens for learning one letter, and which letters are
//! unlocked.

use crate::attempt::Level;
use crate::error::Result;
use crate::letters::{AVAILABLE_LETTERS, letter_data};
use crate::progress::{SettingsStore, UserSettings};

/// One step of a letter's flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFlowStep {
    Introduction,
    WordAssociation,
    Level1Fill,
    Level2Trace,
    Level3FreeDraw,
    Congratulations,
}

impl LetterFlowStep {
    pub const ALL: [LetterFlowStep; 6] = [
        LetterFlowStep::Introduction,
        LetterFlowStep::WordAssociation,
        LetterFlowStep::Level1Fill,
        LetterFlowStep::Level2Trace,
        LetterFlowStep::Level3FreeDraw,
        LetterFlowStep::Congratulations,
    ];

    /// The following step; `None` after congratulations
    pub fn next(self) -> Option<Self> {
        match self {
            LetterFlowStep::Introduction => Some(LetterFlowStep::WordAssociation),
            LetterFlowStep::WordAssociation => Some(LetterFlowStep::Level1Fill),
            LetterFlowStep::Level1Fill => Some(LetterFlowStep::Level2Trace),
            LetterFlowStep::Level2Trace => Some(LetterFlowStep::Level3FreeDraw),
            LetterFlowStep::Level3FreeDraw => Some(LetterFlowStep::Congratulations),
            LetterFlowStep::Congratulations => None,
        }
    }

    /// The drawing level this step plays, if any
    pub fn level(self) -> Option<Level> {
        match self {
            LetterFlowStep::Level1Fill => Some(Level::Fill),
            LetterFlowStep::Level2Trace => Some(Level::Trace),
            LetterFlowStep::Level3FreeDraw => Some(Level::FreeDraw),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LetterFlowStep::Introduction => "Meet the Letter",
            LetterFlowStep::WordAssociation => "Words with the Letter",
            LetterFlowStep::Congratulations => "Well Done!",
            step => step.level().map_or("", Level::title),
        }
    }
}

/// Progress through one letter's steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFlow {
    letter: String,
    step: LetterFlowStep,
}

impl LetterFlow {
    pub fn new(letter: &str) -> Self {
        Self {
            letter: letter.trim().to_ascii_uppercase(),
            step: LetterFlowStep::Introduction,
        }
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn step(&self) -> LetterFlowStep {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step == LetterFlowStep::Congratulations
    }

    /// Move to the next step
    ///
    /// Reaching congratulations records the letter as completed in `store`.
    /// Advancing past the last step is a no-op.
    pub fn advance(&mut self, store: &mut impl SettingsStore) -> Result<LetterFlowStep> {
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };
        tracing::debug!("Letter '{}': {:?} -> {:?}", self.letter, self.step, next);
        self.step = next;
        if next == LetterFlowStep::Congratulations {
            store.save_completed_letter(&self.letter)?;
        }
        Ok(next)
    }
}

/// Whether a letter can be started
///
/// "A" is always open; "B" opens once "A" is completed. Letters without
/// built-in data are never available.
pub fn is_letter_available(letter: &str, settings: &UserSettings) -> bool {
    let id = letter.trim().to_ascii_uppercase();
    if letter_data(&id).is_none() {
        return false;
    }
    match id.as_str() {
        "A" => true,
        "B" => settings.is_completed("A"),
        _ => false,
    }
}

/// All letters with data, paired with whether each is unlocked
pub fn letter_menu(settings: &UserSettings) -> Vec<(&'static str, bool)> {
    AVAILABLE_LETTERS
        .iter()
        .map(|&id| (id, is_letter_available(id, settings)))
        .collect()
}
