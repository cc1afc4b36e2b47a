//! Mastermind: break a hidden sequence of colors.

use crate::config::MastermindConfig;
use crate::console::Console;
use crate::content;
use crate::error::InvalidGuess;
use crate::{GameError, GameSession, RoundBudget, ScoreRecord};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info};

/// Player id recorded for every Mastermind round.
pub const PLAYER_ID: &str = "Player";

/// The palette codes are drawn from. Parsed from the full name or its
/// initial, ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    #[strum(to_string = "Red", serialize = "R")]
    Red,
    #[strum(to_string = "Blue", serialize = "B")]
    Blue,
    #[strum(to_string = "Green", serialize = "G")]
    Green,
    #[strum(to_string = "Yellow", serialize = "Y")]
    Yellow,
}

/// Parse whitespace-separated color tokens.
pub fn parse_colors(line: &str) -> Result<Vec<Color>, InvalidGuess> {
    line.split_whitespace()
        .map(|token| {
            Color::from_str(token).map_err(|_| InvalidGuess::UnknownColor {
                token: token.to_string(),
            })
        })
        .collect()
}

/// The hidden sequence a player is trying to break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Color>);

impl Code {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Deterministic code that cycles the palette to fill `length` slots.
    pub fn fallback(length: usize) -> Self {
        Color::iter().cycle().take(length).collect()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// How close a guess came to the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Feedback {
    /// Right color in the right position.
    pub exact: usize,
    /// Right color in the wrong position.
    pub color: usize,
}

impl Feedback {
    pub fn is_win(&self, code_length: usize) -> bool {
        self.exact == code_length
    }
}

/// Score a guess against the code.
///
/// Exact matches are counted first. Each remaining guess peg then claims
/// the first unclaimed code peg of the same color, so no code peg is
/// counted twice.
pub fn evaluate(code: &Code, guess: &[Color]) -> Result<Feedback, InvalidGuess> {
    let code = code.colors();
    if guess.len() != code.len() {
        return Err(InvalidGuess::Length {
            expected: code.len(),
            actual: guess.len(),
        });
    }

    let mut feedback = Feedback::default();
    let mut guess_used = vec![false; code.len()];
    let mut code_used = vec![false; code.len()];

    for (i, (g, c)) in guess.iter().zip(code).enumerate() {
        if g == c {
            feedback.exact += 1;
            guess_used[i] = true;
            code_used[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if guess_used[i] {
            continue;
        }
        if let Some(j) = (0..code.len()).find(|&j| !code_used[j] && code[j] == *g) {
            feedback.color += 1;
            code_used[j] = true;
        }
    }

    Ok(feedback)
}

/// An interactive Mastermind session.
pub struct Mastermind<C: Console> {
    code: Code,
    max_guesses: u32,
    rounds: RoundBudget,
    console: C,
}

impl<C: Console> Mastermind<C> {
    /// Load the code named by `config`, falling back to the cycled palette.
    pub fn new(config: &MastermindConfig, console: C) -> Self {
        let code = content::load_code_or_fallback(&config.code_path, config.code_length);
        Self::with_code(code, config, console)
    }

    pub fn with_code(code: Code, config: &MastermindConfig, console: C) -> Self {
        info!(
            code_length = code.len(),
            max_rounds = config.max_rounds,
            max_guesses = config.max_guesses,
            "mastermind ready"
        );
        Self {
            code,
            max_guesses: config.max_guesses,
            rounds: RoundBudget::new(config.max_rounds),
            console,
        }
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.rounds.remaining()
    }

    fn report(&mut self, feedback: Feedback) {
        self.console
            .say(&format!("Colors in correct position: {}", feedback.exact));
        self.console
            .say(&format!("Colors in wrong position: {}", feedback.color));
    }
}

impl<C: Console> GameSession for Mastermind<C> {
    fn play_round(&mut self) -> Result<ScoreRecord, GameError> {
        self.rounds.consume();
        self.console.say("Mastermind Codebreaker game started!");

        let prompt = format!(
            "Enter your guess of {} colors (e.g., R G Y B): ",
            self.code.len()
        );
        let mut used: u32 = 0;

        while used < self.max_guesses {
            let line = self.console.ask(&prompt)?;
            let guess = match parse_colors(&line) {
                Ok(guess) => guess,
                Err(err) => {
                    // unreadable input does not cost a guess
                    self.console
                        .say(&format!("{err}. Colors are Red, Blue, Green and Yellow."));
                    continue;
                }
            };

            match evaluate(&self.code, &guess) {
                Ok(feedback) => {
                    self.report(feedback);
                    if feedback.is_win(self.code.len()) {
                        self.console.say("Congratulations! You've broken the code.");
                        debug!(guesses = used + 1, "code broken");
                        let score = 100 - i32::try_from(used).unwrap_or(i32::MAX);
                        return Ok(ScoreRecord::new(score, PLAYER_ID));
                    }
                    self.console.say("Incorrect guess. Try again.");
                }
                Err(err) => self.console.say(&format!("Error: {err}.")),
            }
            used += 1;
        }

        self.console
            .say(&format!("Game over! The correct code was: {}", self.code));
        Ok(ScoreRecord::new(0, PLAYER_ID))
    }

    fn should_continue(&mut self) -> bool {
        self.rounds.has_remaining()
    }
}
