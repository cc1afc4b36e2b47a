//! Command-line interface for the guessing games.

use clap::{Parser, Subcommand};
use guessing_core::config::{
    MastermindConfig, WheelAiConfig, WheelConfig, DEFAULT_CODE_FILE, DEFAULT_PHRASE_FILE,
};
use std::path::PathBuf;

/// Text guessing games: Mastermind and Wheel of Fortune
#[derive(Parser, Debug)]
#[command(name = "guessing-games")]
#[command(about = "Play Mastermind or Wheel of Fortune in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print the final statistics as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Break a hidden color code
    Mastermind {
        /// File whose first line holds the code
        #[arg(long, default_value = DEFAULT_CODE_FILE)]
        code_file: PathBuf,

        /// Number of colors in the code
        #[arg(long, default_value_t = 4)]
        code_length: usize,

        /// Rounds in the session
        #[arg(long, default_value_t = 10)]
        max_rounds: u32,

        /// Guesses allowed per round
        #[arg(long, default_value_t = 10)]
        max_guesses: u32,

        /// Entries in the high score list
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Guess hidden phrases letter by letter
    Wheel {
        /// File with one phrase per line
        #[arg(long, default_value = DEFAULT_PHRASE_FILE)]
        phrase_file: PathBuf,

        /// Incorrect guesses allowed per phrase
        #[arg(long, default_value_t = 5)]
        max_incorrect: u32,

        /// Seed for phrase selection
        #[arg(long)]
        seed: Option<u64>,

        /// Entries in the high score list
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Watch the automated guessers play every phrase
    WheelAi {
        /// File with one phrase per line
        #[arg(long, default_value = DEFAULT_PHRASE_FILE)]
        phrase_file: PathBuf,

        /// Seed for the random guessers
        #[arg(long)]
        seed: Option<u64>,

        /// Entries in each player's high score list
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
}

impl Command {
    pub fn top(&self) -> usize {
        match self {
            Command::Mastermind { top, .. }
            | Command::Wheel { top, .. }
            | Command::WheelAi { top, .. } => *top,
        }
    }
}

pub fn mastermind_config(
    code_file: PathBuf,
    code_length: usize,
    max_rounds: u32,
    max_guesses: u32,
) -> MastermindConfig {
    MastermindConfig {
        code_path: code_file,
        code_length,
        max_rounds,
        max_guesses,
    }
}

pub fn wheel_config(phrase_file: PathBuf, max_incorrect: u32, seed: Option<u64>) -> WheelConfig {
    WheelConfig {
        phrase_path: phrase_file,
        max_incorrect,
        seed,
    }
}

pub fn wheel_ai_config(phrase_file: PathBuf) -> WheelAiConfig {
    WheelAiConfig {
        phrase_path: phrase_file,
    }
}
