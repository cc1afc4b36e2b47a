//! Shared building blocks for the guessing games: score records, the
//! session driver, and the games themselves.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info};

pub mod config;
pub mod console;
pub mod content;
pub mod error;
pub mod mastermind;
pub mod phrase;
pub mod scoring;
pub mod strategy;
pub mod wheel;

pub use error::{ContentError, GameError};
pub use scoring::{LedgerSummary, PlayerSummary, ScoreLedger};
pub use strategy::GuessStrategy;

/// The outcome of one played round: who played it and what they scored.
///
/// Records order by score. Records with equal scores fall back to comparing
/// player ids so that ordering stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreRecord {
    score: i32,
    player_id: String,
}

impl ScoreRecord {
    pub fn new(score: i32, player_id: impl Into<String>) -> Self {
        Self {
            score,
            player_id: player_id.into(),
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }
}

impl Ord for ScoreRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.player_id.cmp(&other.player_id))
    }
}

impl PartialOrd for ScoreRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {}, Score: {}", self.player_id, self.score)
    }
}

/// Core trait that every game implements.
///
/// A game only knows how to play a single round and whether another one
/// should start; [`play_all`] owns the loop.
pub trait GameSession {
    /// Play one complete round and report its score.
    ///
    /// Malformed input is handled inside the round by reprompting. An error
    /// means the round could not be finished at all (for example the console
    /// was closed).
    fn play_round(&mut self) -> Result<ScoreRecord, GameError>;

    /// Whether another round should be started.
    fn should_continue(&mut self) -> bool;
}

/// Drive a game until it declines to continue, collecting every round's
/// record into a fresh ledger.
pub fn play_all<G: GameSession + ?Sized>(game: &mut G) -> Result<ScoreLedger, GameError> {
    let mut ledger = ScoreLedger::new();

    while game.should_continue() {
        let record = game.play_round()?;
        debug!(
            round = ledger.len() + 1,
            player = record.player_id(),
            score = record.score(),
            "round finished"
        );
        ledger.add(record);
    }

    info!(
        rounds = ledger.len(),
        average = ledger.average(),
        "session finished"
    );
    Ok(ledger)
}

/// A decrementing allowance of rounds for games bounded by attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundBudget {
    remaining: u32,
}

impl RoundBudget {
    pub fn new(rounds: u32) -> Self {
        Self { remaining: rounds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining > 0
    }

    /// Spend one round. Returns `false` if the budget was already empty.
    pub fn consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
