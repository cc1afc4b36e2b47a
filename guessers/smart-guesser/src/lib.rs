use guessing_core::strategy::ALPHABET;
use guessing_core::GuessStrategy;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// SmartGuesser picks random letters but never repeats one within a round,
/// so it runs out after 26 guesses.
pub struct SmartGuesser {
    rng: StdRng,
    guessed: Vec<char>,
}

impl SmartGuesser {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            guessed: Vec::with_capacity(ALPHABET.len()),
        }
    }
}

impl Default for SmartGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessStrategy for SmartGuesser {
    fn player_id(&self) -> &'static str {
        "SmartGuesser"
    }

    fn next_guess(&mut self) -> Option<char> {
        let unused: Vec<char> = ALPHABET
            .chars()
            .filter(|letter| !self.guessed.contains(letter))
            .collect();
        let letter = *unused.choose(&mut self.rng)?;
        self.guessed.push(letter);
        Some(letter)
    }

    fn reset(&mut self) {
        self.guessed.clear();
    }
}
