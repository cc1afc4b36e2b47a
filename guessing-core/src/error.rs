//! Error types shared by the games.

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

/// A failure that stops a session from finishing.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// The console ran out of input while a round was waiting on the player.
    #[display("input closed before the round finished")]
    InputClosed,
    /// A round was started with no content left to play.
    #[display("no content left to play")]
    OutOfContent,
    /// Reading from the console failed.
    #[display("console error: {source}")]
    Console { source: io::Error },
}

impl From<io::Error> for GameError {
    fn from(source: io::Error) -> Self {
        Self::Console { source }
    }
}

/// Content source (code file or phrase file) could not be used.
#[derive(Debug, Clone, Display, Error)]
#[display("Content error in {}: {} at {}:{}", path, message, file, line)]
pub struct ContentError {
    /// Path of the source that failed.
    pub path: String,
    /// What went wrong.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ContentError {
    /// Creates a new content error with caller location tracking.
    #[track_caller]
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.display().to_string(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A Mastermind guess that cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidGuess {
    #[display("Your guess must have exactly {expected} colors (got {actual})")]
    Length { expected: usize, actual: usize },
    #[display("Unknown color '{token}'")]
    UnknownColor { token: String },
}

/// A Wheel of Fortune letter that was rejected before counting as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidLetter {
    #[display("Invalid input. Please enter only a single letter")]
    NotSingle,
    #[display("Invalid input. Only letters are allowed")]
    NotLetter,
    #[display("Letter '{letter}' already guessed. Try a different letter")]
    Repeated { letter: char },
}
