use guessing_core::strategy::random_letter;
use guessing_core::GuessStrategy;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// DumbGuesser picks a uniformly random letter every time, with no memory
/// of what it already tried. Repeats are possible and each one costs a
/// guess.
pub struct DumbGuesser {
    rng: StdRng,
}

impl DumbGuesser {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DumbGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessStrategy for DumbGuesser {
    fn player_id(&self) -> &'static str {
        "DumbGuesser"
    }

    fn next_guess(&mut self) -> Option<char> {
        Some(random_letter(&mut self.rng))
    }

    fn reset(&mut self) {}
}
