//! Per-game settings.

use serde::Deserialize;
use std::path::PathBuf;

/// File the Mastermind code is read from.
pub const DEFAULT_CODE_FILE: &str = "Mastermind.txt";
/// File the Wheel of Fortune phrases are read from.
pub const DEFAULT_PHRASE_FILE: &str = "WOFPhrases.txt";

/// Settings for a Mastermind session.
///
/// `max_rounds` bounds how many full rounds the session plays and
/// `max_guesses` bounds the guesses inside one round. They are independent;
/// both default to 10.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MastermindConfig {
    pub code_path: PathBuf,
    pub code_length: usize,
    pub max_rounds: u32,
    pub max_guesses: u32,
}

impl Default for MastermindConfig {
    fn default() -> Self {
        Self {
            code_path: PathBuf::from(DEFAULT_CODE_FILE),
            code_length: 4,
            max_rounds: 10,
            max_guesses: 10,
        }
    }
}

/// Settings for the human Wheel of Fortune game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub phrase_path: PathBuf,
    /// Incorrect guesses allowed per phrase.
    pub max_incorrect: u32,
    /// Seed for phrase selection; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            phrase_path: PathBuf::from(DEFAULT_PHRASE_FILE),
            max_incorrect: 5,
            seed: None,
        }
    }
}

/// Settings for the AI Wheel of Fortune game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WheelAiConfig {
    pub phrase_path: PathBuf,
}

impl Default for WheelAiConfig {
    fn default() -> Self {
        Self {
            phrase_path: PathBuf::from(DEFAULT_PHRASE_FILE),
        }
    }
}
