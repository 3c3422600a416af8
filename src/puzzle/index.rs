//! Puzzle word index
//!
//! Groups every dictionary word playable with the current letters into buckets by
//! length and tracks which of them the player has found.

use crate::core::{LetterSet, can_form};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use tracing::debug;

/// Shortest word that counts as a puzzle word
pub const MIN_WORD_LEN: usize = 3;

/// A dictionary word that belongs to the current puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    text: String,
    found: bool,
}

impl PuzzleWord {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found
    }
}

/// All puzzle words of one length
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    words: Vec<PuzzleWord>,
    positions: FxHashMap<String, usize>,
    found: usize,
}

impl Bucket {
    fn push(&mut self, text: &str) {
        self.positions.insert(text.to_string(), self.words.len());
        self.words.push(PuzzleWord {
            text: text.to_string(),
            found: false,
        });
    }

    /// Words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[PuzzleWord] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub const fn found(&self) -> usize {
        self.found
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found == self.words.len()
    }
}

/// Read-only view of one word for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordView<'a> {
    pub text: &'a str,
    pub found: bool,
}

/// Read-only view of one bucket for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketView<'a> {
    pub length: usize,
    pub words: Vec<WordView<'a>>,
}

impl BucketView<'_> {
    #[must_use]
    pub fn found(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }
}

/// Puzzle words grouped by length
///
/// Built in one pass over the dictionary for a given letter set and thrown away when the
/// letters change. Counters only ever go up.
#[derive(Debug, Clone, Default)]
pub struct PuzzleIndex {
    buckets: BTreeMap<usize, Bucket>,
}

impl PuzzleIndex {
    /// Collect every word of at least [`MIN_WORD_LEN`] letters that `letters` can spell
    ///
    /// The whole dictionary is scanned. Within a bucket words keep dictionary order; a
    /// word repeated in the dictionary is only added once.
    ///
    /// # Examples
    /// ```
    /// use zen_word::core::LetterSet;
    /// use zen_word::puzzle::PuzzleIndex;
    ///
    /// let dictionary = ["CAT", "DOG", "ABCDEFG", "AT"].map(String::from);
    /// let letters = LetterSet::new("ABCDOGT").unwrap();
    ///
    /// let index = PuzzleIndex::build(&dictionary, &letters);
    /// assert_eq!(index.total_words(), 2);
    /// assert_eq!(index.bucket(3).unwrap().count(), 2);
    /// ```
    #[must_use]
    pub fn build(dictionary: &[String], letters: &LetterSet) -> Self {
        let mut buckets: BTreeMap<usize, Bucket> = BTreeMap::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for word in dictionary {
            let len = word.chars().count();
            if len < MIN_WORD_LEN || !can_form(word, letters.as_bytes()) {
                continue;
            }
            if !seen.insert(word.as_str()) {
                continue;
            }
            buckets.entry(len).or_default().push(word);
        }

        let index = Self { buckets };
        debug!(
            letters = %letters,
            words = index.total_words(),
            buckets = index.buckets.len(),
            "built puzzle index"
        );
        index
    }

    /// Mark `word` as found
    ///
    /// Only looks for `word` among the puzzle words; it does not check the letters.
    /// Returns `false` if the word is not a puzzle word. Marking a word that is already
    /// found returns `true` and changes nothing.
    pub fn mark_found(&mut self, word: &str) -> bool {
        let Some(bucket) = self.buckets.get_mut(&word.chars().count()) else {
            return false;
        };
        let Some(&pos) = bucket.positions.get(word) else {
            return false;
        };

        let entry = &mut bucket.words[pos];
        if !entry.found {
            entry.found = true;
            bucket.found += 1;
        }
        true
    }

    /// Whether `word` is a puzzle word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&word.chars().count())
            .is_some_and(|b| b.positions.contains_key(word))
    }

    /// Whether `word` is a puzzle word that has already been found
    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.buckets
            .get(&word.chars().count())
            .and_then(|b| b.positions.get(word).map(|&pos| b.words[pos].found))
            .unwrap_or(false)
    }

    /// True once every puzzle word has been found (or there were none)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.buckets.values().all(Bucket::is_complete)
    }

    #[must_use]
    pub fn bucket(&self, length: usize) -> Option<&Bucket> {
        self.buckets.get(&length)
    }

    /// Buckets in ascending length order
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &Bucket)> {
        self.buckets.iter().map(|(&len, b)| (len, b))
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.buckets.values().map(Bucket::count).sum()
    }

    #[must_use]
    pub fn total_found(&self) -> usize {
        self.buckets.values().map(Bucket::found).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Snapshot of every bucket for display
    ///
    /// Ordered by ascending length, then dictionary order within a bucket.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BucketView<'_>> {
        self.buckets
            .iter()
            .map(|(&length, bucket)| BucketView {
                length,
                words: bucket
                    .words
                    .iter()
                    .map(|w| WordView {
                        text: &w.text,
                        found: w.found,
                    })
                    .collect(),
            })
            .collect()
    }
}
