//! Hidden phrases and the pool they are drawn from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Character shown in place of a letter that has not been guessed.
pub const PLACEHOLDER: char = '*';

/// Only ASCII letters are ever hidden.
pub fn is_hidden(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Render `phrase` with every unguessed letter replaced by [`PLACEHOLDER`].
pub fn render(phrase: &str, guesses: &[char]) -> String {
    phrase
        .chars()
        .map(|c| {
            if is_hidden(c) && !guesses.contains(&c.to_ascii_lowercase()) {
                PLACEHOLDER
            } else {
                c
            }
        })
        .collect()
}

/// A secret phrase plus the letters guessed against it so far.
///
/// Letters match ignoring ASCII case; the rendering keeps the phrase's own
/// case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenPhrase {
    phrase: String,
    rendering: Vec<char>,
    guesses: Vec<char>,
}

impl HiddenPhrase {
    pub fn new(phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        let rendering = render(&phrase, &[]).chars().collect();
        Self {
            phrase,
            rendering,
            guesses: Vec::new(),
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Letters guessed so far, lowercased, in guess order.
    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn hidden_count(&self) -> usize {
        // compare against the phrase so a literal '*' in it is not counted
        self.rendering
            .iter()
            .zip(self.phrase.chars())
            .filter(|(shown, actual)| **shown != *actual)
            .count()
    }

    pub fn is_solved(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Apply a guess. Returns whether the phrase contains the letter.
    ///
    /// Guessing a letter that is already revealed leaves the rendering
    /// unchanged.
    pub fn reveal(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if !self.guesses.contains(&letter) {
            self.guesses.push(letter);
        }

        let mut found = false;
        for (slot, c) in self.rendering.iter_mut().zip(self.phrase.chars()) {
            if is_hidden(c) && c.to_ascii_lowercase() == letter {
                *slot = c;
                found = true;
            }
        }
        found
    }
}

impl fmt::Display for HiddenPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rendering.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Phrases waiting to be played, drawn at random without replacement.
#[derive(Debug, Clone)]
pub struct PhrasePool {
    phrases: Vec<String>,
    rng: StdRng,
}

impl PhrasePool {
    pub fn new(phrases: Vec<String>) -> Self {
        Self::with_rng(phrases, StdRng::from_os_rng())
    }

    pub fn with_seed(phrases: Vec<String>, seed: u64) -> Self {
        Self::with_rng(phrases, StdRng::seed_from_u64(seed))
    }

    fn with_rng(phrases: Vec<String>, rng: StdRng) -> Self {
        Self { phrases, rng }
    }

    /// Remove and return a random phrase.
    pub fn take_random(&mut self) -> Option<String> {
        if self.phrases.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.phrases.len());
        Some(self.phrases.remove(index))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
