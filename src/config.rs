//! Game configuration

use crate::wordlists::DEFAULT_MAX_WORD_LEN;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: PathBuf,
    pub max_word_len: usize,
    pub seed: Option<u64>,
    pub tui: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: dictionary.into(),
            max_word_len: DEFAULT_MAX_WORD_LEN,
            seed: None,
            tui: false,
        }
    }

    /// The process-wide random source
    ///
    /// Seeded from `seed` when given, from the OS otherwise. Create it once and reuse it
    /// for every puzzle.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = GameConfig::new("words.txt");
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.max_word_len, DEFAULT_MAX_WORD_LEN);
        assert_eq!(config.seed, None);
        assert!(!config.tui);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::new("words.txt")
        };

        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
