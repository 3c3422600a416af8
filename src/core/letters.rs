//! Puzzle letters
//!
//! A [`LetterSet`] is the seven distinct letters a puzzle is played with. New sets are
//! drawn from a weighted [`LetterPool`] by [`generate_letters`].

use rand::Rng;
use std::fmt;

/// Number of letters in every puzzle
pub const LETTER_COUNT: usize = 7;

/// Minimum number of vowels a generated letter set must contain
pub const MIN_VOWELS: usize = 2;

/// Letters counted as vowels
pub const VOWELS: &str = "AEIOU";

/// Built-in weighted pool: common letters repeat more often than rare ones
pub const STANDARD_POOL: &str = concat!(
    "EEEEEEEEEEEEAAAAAAAAAAIIIIIIIIII",
    "OOOOOOOOOOOONNNNNN",
    "RRRRRRTTTTTTLLLLSSSS",
    "DDDDGGGBBCCMMPPFFHHVVWWYYKJXQZ",
);

#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.as_bytes().contains(&letter)
}

/// Error type for letter pools that cannot produce a valid puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    InvalidCharacter(char),
    TooFewLetters(usize),
    TooFewVowels(usize),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => {
                write!(f, "Letter pool may only contain A-Z, got {c:?}")
            }
            Self::TooFewLetters(n) => {
                write!(
                    f,
                    "Letter pool needs at least {LETTER_COUNT} distinct letters, got {n}"
                )
            }
            Self::TooFewVowels(n) => {
                write!(
                    f,
                    "Letter pool needs at least {MIN_VOWELS} distinct vowels, got {n}"
                )
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// Error type for hand-built letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    InvalidLength(usize),
    InvalidCharacter(char),
    DuplicateLetter(char),
    TooFewVowels(usize),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Letter set must have exactly {LETTER_COUNT} letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "Letter set may only contain A-Z, got {c:?}"),
            Self::DuplicateLetter(c) => write!(f, "Letter {c} appears more than once"),
            Self::TooFewVowels(n) => {
                write!(f, "Letter set needs at least {MIN_VOWELS} vowels, got {n}")
            }
        }
    }
}

impl std::error::Error for LetterSetError {}

/// Weighted multiset of letters to draw puzzles from
///
/// Each position in the pool is equally likely to be picked, so a letter's weight is
/// its multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<u8>,
}

impl LetterPool {
    /// Build a pool from a string of uppercase letters
    ///
    /// # Errors
    /// Returns `PoolError` if the pool contains anything other than `A-Z`, or if it
    /// could never yield a valid set (fewer than 7 distinct letters or 2 distinct vowels).
    ///
    /// # Examples
    /// ```
    /// use zen_word::core::LetterPool;
    ///
    /// assert!(LetterPool::new("AAEEBCDFG").is_ok());
    /// assert!(LetterPool::new("AEBCDF").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, PoolError> {
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(PoolError::InvalidCharacter(bad));
        }

        let mut seen = [false; 26];
        for &b in text.as_bytes() {
            seen[usize::from(b - b'A')] = true;
        }

        let distinct = seen.iter().filter(|&&s| s).count();
        if distinct < LETTER_COUNT {
            return Err(PoolError::TooFewLetters(distinct));
        }

        let vowels = VOWELS
            .bytes()
            .filter(|&v| seen[usize::from(v - b'A')])
            .count();
        if vowels < MIN_VOWELS {
            return Err(PoolError::TooFewVowels(vowels));
        }

        Ok(Self {
            letters: text.as_bytes().to_vec(),
        })
    }

    /// The built-in English-weighted pool
    #[must_use]
    pub fn standard() -> Self {
        Self {
            letters: STANDARD_POOL.as_bytes().to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }

    /// Pick one letter, uniformly over pool positions
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.letters[rng.random_range(0..self.letters.len())]
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::standard()
    }
}

/// The seven distinct letters of one puzzle, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet {
    letters: [u8; LETTER_COUNT],
}

impl LetterSet {
    /// Build a letter set from text, e.g. for a fixed puzzle
    ///
    /// Input is case-insensitive.
    ///
    /// # Errors
    /// Returns `LetterSetError` unless the text is exactly seven distinct letters with at
    /// least two vowels.
    ///
    /// # Examples
    /// ```
    /// use zen_word::core::LetterSet;
    ///
    /// let letters = LetterSet::new("abcdogt").unwrap();
    /// assert_eq!(letters.to_string(), "ABCDOGT");
    ///
    /// assert!(LetterSet::new("CATXYZW").is_err()); // one vowel
    /// ```
    pub fn new(text: &str) -> Result<Self, LetterSetError> {
        let text = text.to_ascii_uppercase();

        let len = text.chars().count();
        if len != LETTER_COUNT {
            return Err(LetterSetError::InvalidLength(len));
        }

        let mut letters = [0u8; LETTER_COUNT];
        for (i, c) in text.chars().enumerate() {
            if !c.is_ascii_uppercase() {
                return Err(LetterSetError::InvalidCharacter(c));
            }
            let b = c as u8;
            if letters[..i].contains(&b) {
                return Err(LetterSetError::DuplicateLetter(c));
            }
            letters[i] = b;
        }

        let set = Self { letters };
        let vowels = set.vowel_count();
        if vowels < MIN_VOWELS {
            return Err(LetterSetError::TooFewVowels(vowels));
        }

        Ok(set)
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; LETTER_COUNT] {
        &self.letters
    }

    /// Letters as chars, in draw order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| char::from(b))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.letters.iter().filter(|&&b| is_vowel(b)).count()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Draw a fresh set of seven distinct letters with at least two vowels
///
/// Letters are drawn one at a time from `pool`; a letter already chosen is redrawn. A
/// complete draw with too few vowels is thrown away and started over from scratch, so
/// the vowel count is never patched up after the fact.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use zen_word::core::{LetterPool, generate_letters};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let letters = generate_letters(&mut rng, &LetterPool::standard());
/// assert!(letters.vowel_count() >= 2);
/// ```
pub fn generate_letters<R: Rng + ?Sized>(rng: &mut R, pool: &LetterPool) -> LetterSet {
    loop {
        let mut letters = [0u8; LETTER_COUNT];
        let mut chosen = 0;

        while chosen < LETTER_COUNT {
            let letter = pool.draw(rng);
            if !letters[..chosen].contains(&letter) {
                letters[chosen] = letter;
                chosen += 1;
            }
        }

        let set = LetterSet { letters };
        if set.vowel_count() >= MIN_VOWELS {
            return set;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_sets_are_distinct_with_two_vowels() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = LetterPool::standard();

        for _ in 0..500 {
            let set = generate_letters(&mut rng, &pool);
            let bytes = set.as_bytes();

            for (i, b) in bytes.iter().enumerate() {
                assert!(b.is_ascii_uppercase());
                assert!(!bytes[i + 1..].contains(b), "duplicate in {set}");
            }
            assert!(set.vowel_count() >= MIN_VOWELS, "too few vowels in {set}");
        }
    }

    #[test]
    fn generated_letters_come_from_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = LetterPool::new("AAAEEEIBCDFG").unwrap();

        for _ in 0..50 {
            let set = generate_letters(&mut rng, &pool);
            assert!(set.chars().all(|c| "AEIBCDFG".contains(c)));
        }
    }

    #[test]
    fn exact_pool_yields_every_letter() {
        // Seven distinct letters: every draw must use all of them
        let mut rng = StdRng::seed_from_u64(9);
        let pool = LetterPool::new("AEBCDFG").unwrap();

        let set = generate_letters(&mut rng, &pool);
        let mut sorted = *set.as_bytes();
        sorted.sort_unstable();
        assert_eq!(&sorted, b"ABCDEFG");
    }

    #[test]
    fn weighting_follows_pool_multiplicity() {
        let rare = "EIOUBCDFGHJKLMNPRST";
        let pool = LetterPool::new(&format!("{}{rare}", "A".repeat(200))).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let draws = 500;
        let mut a_count = 0;
        let mut rare_counts = [0usize; 26];
        for _ in 0..draws {
            let set = generate_letters(&mut rng, &pool);
            if set.contains(b'A') {
                a_count += 1;
            }
            for b in rare.bytes().filter(|&b| set.contains(b)) {
                rare_counts[usize::from(b - b'A')] += 1;
            }
        }

        // A fills most of the pool, so it shows up almost every time
        assert!(a_count * 100 >= draws * 95, "A in only {a_count}/{draws} sets");
        for b in rare.bytes() {
            let seen = rare_counts[usize::from(b - b'A')];
            assert!(
                seen * 100 <= draws * 60,
                "{} in {seen}/{draws} sets",
                char::from(b)
            );
        }
    }

    #[test]
    fn same_seed_same_letters() {
        let pool = LetterPool::standard();
        let a = generate_letters(&mut StdRng::seed_from_u64(3), &pool);
        let b = generate_letters(&mut StdRng::seed_from_u64(3), &pool);
        assert_eq!(a, b);
    }

    #[test]
    fn shared_rng_varies_between_puzzles() {
        let pool = LetterPool::standard();
        let mut rng = StdRng::seed_from_u64(11);

        let sets: Vec<LetterSet> = (0..10).map(|_| generate_letters(&mut rng, &pool)).collect();
        assert!(sets.iter().any(|s| *s != sets[0]));
    }

    #[test]
    fn pool_rejects_impossible_configurations() {
        assert_eq!(
            LetterPool::new("AEBCDF"),
            Err(PoolError::TooFewLetters(6))
        );
        assert_eq!(
            LetterPool::new("AAAABCDFGH"),
            Err(PoolError::TooFewVowels(1))
        );
        assert_eq!(
            LetterPool::new("AEbCDFG"),
            Err(PoolError::InvalidCharacter('b'))
        );
    }

    #[test]
    fn standard_pool_is_valid() {
        assert!(LetterPool::new(STANDARD_POOL).is_ok());
    }

    #[test]
    fn letter_set_validation() {
        assert!(LetterSet::new("ABCDOGT").is_ok());
        assert_eq!(
            LetterSet::new("ABCDOG"),
            Err(LetterSetError::InvalidLength(6))
        );
        assert_eq!(
            LetterSet::new("ABCDOGA"),
            Err(LetterSetError::DuplicateLetter('A'))
        );
        assert_eq!(
            LetterSet::new("CATXYZW"),
            Err(LetterSetError::TooFewVowels(1))
        );
        assert_eq!(
            LetterSet::new("ABCD0GT"),
            Err(LetterSetError::InvalidCharacter('0'))
        );
    }

    #[test]
    fn letter_set_display_keeps_order() {
        let set = LetterSet::new("togdcba").unwrap();
        assert_eq!(set.to_string(), "TOGDCBA");
        assert!(set.contains(b'G'));
        assert!(!set.contains(b'Z'));
    }
}
