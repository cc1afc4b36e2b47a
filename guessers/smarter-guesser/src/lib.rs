use guessing_core::strategy::FREQUENCY_ORDER;
use guessing_core::GuessStrategy;

/// SmarterGuesser works through the letters from most to least common in
/// English, skipping any it already tried this round.
#[derive(Debug, Default)]
pub struct SmarterGuesser {
    guessed: Vec<char>,
}

impl SmarterGuesser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuessStrategy for SmarterGuesser {
    fn player_id(&self) -> &'static str {
        "SmarterGuesser"
    }

    fn next_guess(&mut self) -> Option<char> {
        let letter = FREQUENCY_ORDER
            .chars()
            .find(|letter| !self.guessed.contains(letter))?;
        self.guessed.push(letter);
        Some(letter)
    }

    fn reset(&mut self) {
        self.guessed.clear();
    }
}
