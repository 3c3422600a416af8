//! Dictionary loading
//!
//! Reads one word per line from a file (or any buffered reader) into an in-memory,
//! uppercase, read-only word list.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Longest dictionary line accepted by default
pub const DEFAULT_MAX_WORD_LEN: usize = 50;

/// Error type for dictionary sources that cannot be read
#[derive(Debug)]
pub enum LoadError {
    Open { path: PathBuf, source: io::Error },
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Cannot open dictionary {}: {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}

/// Ordered list of uppercase dictionary words
///
/// Loaded once and shared read-only by every puzzle. Duplicates are kept as they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    skipped: usize,
}

impl Dictionary {
    /// Read a dictionary from any line source
    ///
    /// Lines are trimmed and uppercased; blank lines are dropped. Lines longer than
    /// `max_word_len` characters are skipped with a warning.
    ///
    /// # Errors
    /// Returns the underlying I/O error if a line cannot be read (including invalid UTF-8).
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use zen_word::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_reader(Cursor::new("cat\r\n\nDog\n"), 50).unwrap();
    /// assert_eq!(dict.words(), ["CAT", "DOG"]);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R, max_word_len: usize) -> io::Result<Self> {
        let mut words = Vec::new();
        let mut skipped = 0;

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let len = trimmed.chars().count();
            if len > max_word_len {
                warn!(
                    line = number + 1,
                    len, max_word_len, "skipping overlong dictionary entry"
                );
                skipped += 1;
                continue;
            }

            words.push(trimmed.to_uppercase());
        }

        Ok(Self { words, skipped })
    }

    /// Build a dictionary from words already in memory
    ///
    /// Applies the same trimming and uppercasing as [`Dictionary::from_reader`], with no
    /// length limit.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(str::to_uppercase)
            .collect();

        Self { words, skipped: 0 }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of lines rejected for exceeding the length limit
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Load a dictionary file
///
/// # Errors
///
/// Returns `LoadError::Open` if the file cannot be opened and `LoadError::Read` if
/// reading fails part way through.
///
/// # Examples
/// ```no_run
/// use zen_word::wordlists::{DEFAULT_MAX_WORD_LEN, load_dictionary};
///
/// let dict = load_dictionary("words.txt", DEFAULT_MAX_WORD_LEN).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    max_word_len: usize,
) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening dictionary");

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let dict =
        Dictionary::from_reader(BufReader::new(file), max_word_len).map_err(|source| {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

    if dict.is_empty() {
        warn!(path = %path.display(), "dictionary contains no words");
    }
    info!(
        words = dict.len(),
        skipped = dict.skipped(),
        "dictionary loaded"
    );

    Ok(dict)
}
