//! Trait for automated Wheel of Fortune guessers.

use rand::Rng;

/// Every letter a guesser may produce.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// English letters ranked from most to least common.
pub const FREQUENCY_ORDER: &str = "eaoinshrtldcumwfgypbvkjxqz";

/// A pluggable policy for producing letter guesses.
///
/// Implementations keep whatever per-round history they need and must
/// forget it on [`reset`](GuessStrategy::reset), which is called before
/// every new phrase.
pub trait GuessStrategy {
    /// Stable label recorded against this guesser's scores.
    fn player_id(&self) -> &'static str;

    /// Produce the next lowercase letter, or `None` once the strategy has
    /// nothing left to try this round.
    fn next_guess(&mut self) -> Option<char>;

    /// Clear per-round history.
    fn reset(&mut self);
}

/// A uniformly random lowercase letter.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'a' + rng.random_range(0..26u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct AlphabetBot {
        next: usize,
    }

    impl GuessStrategy for AlphabetBot {
        fn player_id(&self) -> &'static str {
            "alphabet-bot"
        }

        fn next_guess(&mut self) -> Option<char> {
            let letter = ALPHABET.chars().nth(self.next)?;
            self.next += 1;
            Some(letter)
        }

        fn reset(&mut self) {
            self.next = 0;
        }
    }

    #[test]
    fn frequency_order_covers_the_alphabet() {
        let mut ranked: Vec<char> = FREQUENCY_ORDER.chars().collect();
        ranked.sort_unstable();
        assert_eq!(ranked.into_iter().collect::<String>(), ALPHABET);
    }

    #[test]
    fn random_letters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(random_letter(&mut rng).is_ascii_lowercase());
        }
    }

    #[test]
    fn strategies_work_as_trait_objects() {
        let mut bot: Box<dyn GuessStrategy> = Box::new(AlphabetBot { next: 0 });
        assert_eq!(bot.next_guess(), Some('a'));
        assert_eq!(bot.next_guess(), Some('b'));
        bot.reset();
        assert_eq!(bot.next_guess(), Some('a'));
        assert_eq!(bot.player_id(), "alphabet-bot");
    }
}
