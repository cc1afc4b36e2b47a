//! Line-oriented console used by the interactive games.

use crate::GameError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where a game reads player input and writes its messages.
pub trait Console {
    /// Read one line without its terminator. `None` means input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Print a full line.
    fn say(&mut self, text: &str);

    /// Print a prompt without ending the line.
    fn prompt(&mut self, text: &str);

    /// Prompt and wait for an answer, treating closed input as an error.
    fn ask(&mut self, text: &str) -> Result<String, GameError> {
        self.prompt(text);
        self.read_line()?.ok_or(GameError::InputClosed)
    }
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }

    fn prompt(&mut self, text: &str) {
        print!("{text}");
        io::stdout().flush().ok();
    }
}

/// Console fed from a fixed list of input lines, recording everything the
/// game prints.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything printed so far, one entry per `say` or `prompt`.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any printed entry contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn prompt(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
