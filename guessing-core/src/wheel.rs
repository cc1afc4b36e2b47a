//! Wheel of Fortune: reveal a hidden phrase one letter at a time.

use crate::config::{WheelAiConfig, WheelConfig};
use crate::console::Console;
use crate::content;
use crate::error::InvalidLetter;
use crate::phrase::{HiddenPhrase, PhrasePool};
use crate::{GameError, GameSession, GuessStrategy, ScoreRecord};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Player id recorded for human rounds.
pub const USER_ID: &str = "User";

/// Check a line of player input as a letter guess.
///
/// The input is trimmed and lowercased; it must be exactly one ASCII letter
/// that is not in `guessed`.
pub fn validate_letter(input: &str, guessed: &[char]) -> Result<char, InvalidLetter> {
    let input = input.trim().to_lowercase();
    let mut chars = input.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(InvalidLetter::NotSingle);
    };
    if !letter.is_ascii_alphabetic() {
        return Err(InvalidLetter::NotLetter);
    }
    if guessed.contains(&letter) {
        return Err(InvalidLetter::Repeated { letter });
    }
    Ok(letter)
}

/// A human guessing phrases with a budget of incorrect guesses.
///
/// Score is ten points for every incorrect guess left unused.
pub struct WheelOfFortuneUserGame<C: Console> {
    pool: PhrasePool,
    max_incorrect: u32,
    rounds_played: u32,
    console: C,
}

impl<C: Console> WheelOfFortuneUserGame<C> {
    /// Load the phrase file named by `config`.
    pub fn new(config: &WheelConfig, console: C) -> Self {
        let phrases = content::load_phrases_or_empty(&config.phrase_path);
        let pool = match config.seed {
            Some(seed) => PhrasePool::with_seed(phrases, seed),
            None => PhrasePool::new(phrases),
        };
        Self::with_pool(pool, config.max_incorrect, console)
    }

    pub fn with_pool(pool: PhrasePool, max_incorrect: u32, console: C) -> Self {
        Self {
            pool,
            max_incorrect,
            rounds_played: 0,
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn phrases_left(&self) -> usize {
        self.pool.len()
    }

    fn read_letter(&mut self, hidden: &HiddenPhrase) -> Result<char, GameError> {
        loop {
            let line = self.console.ask("Enter your guess (one letter): ")?;
            match validate_letter(&line, hidden.guesses()) {
                Ok(letter) => return Ok(letter),
                Err(err) => self.console.say(&format!("{err}.")),
            }
        }
    }
}

impl<C: Console> GameSession for WheelOfFortuneUserGame<C> {
    fn play_round(&mut self) -> Result<ScoreRecord, GameError> {
        let phrase = self.pool.take_random().ok_or(GameError::OutOfContent)?;
        self.rounds_played += 1;

        let mut hidden = HiddenPhrase::new(phrase);
        let mut remaining = self.max_incorrect;

        self.console.say("Welcome to Wheel of Fortune!");
        self.console
            .say(&format!("Try to guess the phrase: {hidden}"));

        while remaining > 0 && !hidden.is_solved() {
            let letter = self.read_letter(&hidden)?;
            if hidden.reveal(letter) {
                self.console
                    .say(&format!("Good guess! The phrase now: {hidden}"));
            } else {
                remaining -= 1;
                self.console
                    .say(&format!("Incorrect guess! Remaining guesses: {remaining}"));
            }
        }

        if hidden.is_solved() {
            self.console.say(&format!(
                "Congratulations! You guessed the phrase: {}",
                hidden.phrase()
            ));
        } else {
            self.console
                .say(&format!("You lose! The phrase was: {}", hidden.phrase()));
        }

        let score = i32::try_from(remaining).unwrap_or(i32::MAX).saturating_mul(10);
        debug!(remaining, score, "user round finished");
        Ok(ScoreRecord::new(score, USER_ID))
    }

    fn should_continue(&mut self) -> bool {
        if self.pool.is_empty() {
            if self.rounds_played == 0 {
                warn!("no phrases to play");
            } else {
                self.console.say("No phrases left to play.");
            }
            return false;
        }
        if self.rounds_played == 0 {
            return true;
        }
        match self.console.ask("Play another game? (y/n): ") {
            Ok(answer) => answer.trim().eq_ignore_ascii_case("y"),
            Err(GameError::Console { source }) => {
                warn!(error = %source, "console failed while asking to continue");
                false
            }
            Err(_) => false,
        }
    }
}

/// Play one phrase to completion with an automated guesser.
///
/// Every guess counts, including repeats. Score is `100 - guesses`, which
/// goes negative for phrases that take more than a hundred guesses.
pub fn play_phrase(strategy: &mut dyn GuessStrategy, phrase: &str) -> ScoreRecord {
    strategy.reset();
    let mut hidden = HiddenPhrase::new(phrase);
    let mut guesses: i32 = 0;

    debug!(player = strategy.player_id(), "AI player is guessing");
    while !hidden.is_solved() {
        let Some(letter) = strategy.next_guess() else {
            warn!(
                player = strategy.player_id(),
                hidden = hidden.hidden_count(),
                "guesser ran out of letters"
            );
            break;
        };
        guesses += 1;
        if hidden.reveal(letter) {
            debug!(%letter, phrase = %hidden, "good guess");
        } else {
            debug!(%letter, "incorrect guess");
        }
    }

    ScoreRecord::new(100 - guesses, strategy.player_id())
}

/// Automated guessers, each playing every phrase of the pool.
///
/// Each player gets its own copy of the original phrases, so every player
/// faces the same set.
pub struct WheelOfFortuneAIGame {
    players: Vec<Box<dyn GuessStrategy>>,
    phrases: Vec<String>,
    current: usize,
    queue: VecDeque<String>,
}

impl WheelOfFortuneAIGame {
    pub fn new(players: Vec<Box<dyn GuessStrategy>>, phrases: Vec<String>) -> Self {
        let queue = phrases.iter().cloned().collect();
        Self {
            players,
            phrases,
            current: 0,
            queue,
        }
    }

    /// Load the phrase file named by `config`.
    pub fn from_config(config: &WheelAiConfig, players: Vec<Box<dyn GuessStrategy>>) -> Self {
        Self::new(players, content::load_phrases_or_empty(&config.phrase_path))
    }

    pub fn player_ids(&self) -> Vec<&'static str> {
        self.players.iter().map(|player| player.player_id()).collect()
    }

    /// Move to the next player once the current one has played everything.
    fn advance(&mut self) {
        while self.queue.is_empty() && self.current < self.players.len() {
            self.current += 1;
            if self.current < self.players.len() {
                self.queue = self.phrases.iter().cloned().collect();
            }
        }
    }
}

impl GameSession for WheelOfFortuneAIGame {
    fn play_round(&mut self) -> Result<ScoreRecord, GameError> {
        self.advance();
        let phrase = self.queue.pop_front().ok_or(GameError::OutOfContent)?;
        let player = self
            .players
            .get_mut(self.current)
            .ok_or(GameError::OutOfContent)?;

        let record = play_phrase(player.as_mut(), &phrase);
        info!(
            player = record.player_id(),
            score = record.score(),
            "AI round finished"
        );
        Ok(record)
    }

    fn should_continue(&mut self) -> bool {
        self.advance();
        self.current < self.players.len() && !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::play_all;
    use crate::strategy::ALPHABET;
    use std::io;

    fn user_game(phrases: &[&str], lines: &[&str]) -> WheelOfFortuneUserGame<ScriptedConsole> {
        let pool = PhrasePool::with_seed(phrases.iter().map(|p| p.to_string()).collect(), 1);
        WheelOfFortuneUserGame::with_pool(pool, 5, ScriptedConsole::new(lines.iter().copied()))
    }

    /// Walks the alphabet in order, or a fixed script when given one.
    struct ScriptedGuesser {
        id: &'static str,
        letters: Vec<char>,
        next: usize,
        resets: u32,
    }

    impl ScriptedGuesser {
        fn alphabet(id: &'static str) -> Self {
            Self {
                id,
                letters: ALPHABET.chars().collect(),
                next: 0,
                resets: 0,
            }
        }
    }

    impl GuessStrategy for ScriptedGuesser {
        fn player_id(&self) -> &'static str {
            self.id
        }

        fn next_guess(&mut self) -> Option<char> {
            let letter = self.letters.get(self.next).copied();
            self.next += 1;
            letter
        }

        fn reset(&mut self) {
            self.next = 0;
            self.resets += 1;
        }
    }

    #[test]
    fn validate_letter_rules() {
        assert_eq!(validate_letter(" C ", &[]), Ok('c'));
        assert_eq!(validate_letter("ab", &[]), Err(InvalidLetter::NotSingle));
        assert_eq!(validate_letter("", &[]), Err(InvalidLetter::NotSingle));
        assert_eq!(validate_letter("7", &[]), Err(InvalidLetter::NotLetter));
        assert_eq!(
            validate_letter("e", &['e']),
            Err(InvalidLetter::Repeated { letter: 'e' })
        );
    }

    #[test]
    fn perfect_round_keeps_full_budget() {
        let mut game = user_game(&["cat"], &["c", "a", "t"]);
        let record = game.play_round().unwrap();

        assert_eq!(record, ScoreRecord::new(50, USER_ID));
        assert!(game.console().printed("You guessed the phrase: cat"));
    }

    #[test]
    fn one_miss_costs_ten_points() {
        let mut game = user_game(&["cat"], &["c", "z", "a", "t"]);
        let record = game.play_round().unwrap();
        assert_eq!(record.score(), 40);
    }

    #[test]
    fn losing_scores_zero() {
        let mut game = user_game(&["cat"], &["b", "d", "e", "f", "g"]);
        let record = game.play_round().unwrap();

        assert_eq!(record.score(), 0);
        assert!(game.console().printed("You lose! The phrase was: cat"));
    }

    #[test]
    fn invalid_input_is_reprompted_without_cost() {
        let mut game = user_game(&["cat"], &["cc", "1", "c", "c", "a", "t"]);
        let record = game.play_round().unwrap();

        assert_eq!(record.score(), 50);
        assert!(game.console().printed("only a single letter"));
        assert!(game.console().printed("Only letters are allowed"));
        assert!(game.console().printed("already guessed"));
    }

    #[test]
    fn session_stops_when_user_declines() {
        let mut game = user_game(&["cat", "dog"], &["c", "a", "t", "d", "o", "g", "n"]);
        let ledger = play_all(&mut game).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(game.phrases_left(), 1);
    }

    /// Replays its lines, then fails every read.
    struct FailingConsole {
        inner: ScriptedConsole,
    }

    impl Console for FailingConsole {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            match self.inner.read_line()? {
                Some(line) => Ok(Some(line)),
                None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin gone")),
            }
        }

        fn say(&mut self, text: &str) {
            self.inner.say(text);
        }

        fn prompt(&mut self, text: &str) {
            self.inner.prompt(text);
        }
    }

    #[test]
    fn console_failure_on_replay_question_ends_session() {
        let pool = PhrasePool::with_seed(vec!["a".to_string(), "a".to_string()], 1);
        let console = FailingConsole {
            inner: ScriptedConsole::new(["a"]),
        };
        let mut game = WheelOfFortuneUserGame::with_pool(pool, 5, console);
        let ledger = play_all(&mut game).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(game.phrases_left(), 1);
        assert!(game.console().inner.printed("Play another game?"));
    }

    #[test]
    fn session_stops_when_phrases_run_out() {
        let mut game = user_game(&["ab", "ba"], &["a", "b", "y", "a", "b"]);
        let ledger = play_all(&mut game).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.average_for(USER_ID), 50.0);
        assert!(game.console().printed("No phrases left"));
    }

    #[test]
    fn empty_pool_plays_nothing() {
        let mut game = user_game(&[], &[]);
        let ledger = play_all(&mut game).unwrap();
        assert!(ledger.is_empty());
        assert!(matches!(game.play_round(), Err(GameError::OutOfContent)));
    }

    #[test]
    fn closed_input_ends_the_session_between_rounds() {
        let mut game = user_game(&["a", "a"], &["a"]);
        let ledger = play_all(&mut game).unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn ai_score_counts_every_guess() {
        let mut guesser = ScriptedGuesser::alphabet("abc");
        // "cab" is solved after a, b, c
        assert_eq!(play_phrase(&mut guesser, "cab").score(), 97);
        assert_eq!(guesser.resets, 1);
    }

    #[test]
    fn ai_score_may_go_negative() {
        let mut guesser = ScriptedGuesser {
            id: "slow",
            letters: std::iter::repeat_n('x', 150).chain(['a']).collect(),
            next: 0,
            resets: 0,
        };
        assert_eq!(play_phrase(&mut guesser, "a").score(), -51);
    }

    #[test]
    fn exhausted_guesser_ends_the_round() {
        let mut guesser = ScriptedGuesser {
            id: "short",
            letters: vec!['a'],
            next: 0,
            resets: 0,
        };
        assert_eq!(play_phrase(&mut guesser, "ab").score(), 99);
    }

    #[test]
    fn every_player_plays_every_phrase() {
        let players: Vec<Box<dyn GuessStrategy>> = vec![
            Box::new(ScriptedGuesser::alphabet("first")),
            Box::new(ScriptedGuesser::alphabet("second")),
            Box::new(ScriptedGuesser::alphabet("third")),
        ];
        let mut game =
            WheelOfFortuneAIGame::new(players, vec!["ab".to_string(), "zz".to_string()]);

        let ledger = play_all(&mut game).unwrap();

        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.player_ids(), vec!["first", "second", "third"]);
        for id in game.player_ids() {
            let scores: Vec<i32> = ledger
                .iter()
                .filter(|record| record.player_id() == id)
                .map(ScoreRecord::score)
                .collect();
            assert_eq!(scores, vec![98, 74]);
        }
    }

    #[test]
    fn ai_game_without_phrases_plays_nothing() {
        let players: Vec<Box<dyn GuessStrategy>> =
            vec![Box::new(ScriptedGuesser::alphabet("lonely"))];
        let mut game = WheelOfFortuneAIGame::new(players, Vec::new());

        assert!(play_all(&mut game).unwrap().is_empty());
    }
}
