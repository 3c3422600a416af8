//! Puzzle sessions and the play-again loop
//!
//! A [`Session`] is one puzzle: its letters, its word index, and where play stands. A
//! [`Game`] strings sessions together, owning the random source and the dictionary
//! reference so each new puzzle is drawn from the same generator.

use super::index::{BucketView, PuzzleIndex};
use crate::core::{LetterPool, LetterSet, can_form, generate_letters};
use crate::wordlists::Dictionary;
use rand::Rng;
use tracing::{debug, info};

/// Guess that abandons the current puzzle
pub const QUIT_SENTINEL: &str = "Q";

/// Where play stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    PuzzleComplete,
    PuzzleAbandoned,
    SessionEnded,
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A puzzle word, newly found
    Found(String),
    /// A puzzle word that was found earlier
    AlreadyFound(String),
    /// Uses letters that are not available
    CannotForm(String),
    /// Spellable, but not a puzzle word
    NotInList(String),
    Quit,
    /// The puzzle is over; guesses are ignored
    NotAccepting,
}

impl GuessOutcome {
    /// Whether the guess changed nothing
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::CannotForm(_) | Self::NotInList(_))
    }
}

/// Normalize raw input to the canonical uppercase form
///
/// Strips all surrounding whitespace, not only the line terminator, so `" cat "` and
/// `"cat\r\n"` both become `CAT`.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Whether a play-again answer means yes
///
/// Only the very first character counts; leading whitespace is a no.
#[must_use]
pub fn wants_another(answer: &str) -> bool {
    answer
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// One puzzle from letters to completion
#[derive(Debug, Clone)]
pub struct Session {
    letters: LetterSet,
    index: PuzzleIndex,
    state: SessionState,
}

impl Session {
    /// Start a puzzle with the given letters
    ///
    /// A letter set with no playable words starts out complete.
    #[must_use]
    pub fn new(dictionary: &Dictionary, letters: LetterSet) -> Self {
        let index = PuzzleIndex::build(dictionary.words(), &letters);
        let state = if index.is_complete() {
            SessionState::PuzzleComplete
        } else {
            SessionState::AwaitingGuess
        };

        info!(
            letters = %letters,
            words = index.total_words(),
            "new puzzle"
        );

        Self {
            letters,
            index,
            state,
        }
    }

    /// Start a puzzle with freshly drawn letters
    pub fn generate<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        pool: &LetterPool,
        rng: &mut R,
    ) -> Self {
        Self::new(dictionary, generate_letters(rng, pool))
    }

    /// Evaluate one guess
    ///
    /// The guess is trimmed and uppercased first. `Q` abandons the puzzle. Anything else
    /// is checked against the letters, then against the puzzle words.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.state != SessionState::AwaitingGuess {
            return GuessOutcome::NotAccepting;
        }

        let guess = normalize_guess(raw);

        if guess == QUIT_SENTINEL {
            self.state = SessionState::PuzzleAbandoned;
            debug!("puzzle abandoned");
            return GuessOutcome::Quit;
        }

        let outcome = if !can_form(&guess, self.letters.as_bytes()) {
            GuessOutcome::CannotForm(guess)
        } else if self.index.is_found(&guess) {
            GuessOutcome::AlreadyFound(guess)
        } else if self.index.mark_found(&guess) {
            GuessOutcome::Found(guess)
        } else {
            GuessOutcome::NotInList(guess)
        };
        debug!(?outcome, "guess evaluated");

        if self.index.is_complete() {
            self.state = SessionState::PuzzleComplete;
            info!(words = self.index.total_words(), "puzzle complete");
        }

        outcome
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &PuzzleIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index.is_complete()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<BucketView<'_>> {
        self.index.snapshot()
    }
}

/// Successive puzzles over one dictionary and one random source
pub struct Game<'d, R: Rng> {
    dictionary: &'d Dictionary,
    pool: LetterPool,
    rng: R,
    session: Session,
    ended: bool,
    puzzles: usize,
}

impl<'d, R: Rng> Game<'d, R> {
    /// Start the first puzzle with the standard letter pool
    pub fn new(dictionary: &'d Dictionary, rng: R) -> Self {
        Self::with_pool(dictionary, LetterPool::standard(), rng)
    }

    pub fn with_pool(dictionary: &'d Dictionary, pool: LetterPool, mut rng: R) -> Self {
        let session = Session::generate(dictionary, &pool, &mut rng);
        Self {
            dictionary,
            pool,
            rng,
            session,
            ended: false,
            puzzles: 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current state, including whether the whole game has ended
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.ended {
            SessionState::SessionEnded
        } else {
            self.session.state()
        }
    }

    /// Number of puzzles started so far
    #[inline]
    #[must_use]
    pub const fn puzzles(&self) -> usize {
        self.puzzles
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.ended {
            return GuessOutcome::NotAccepting;
        }
        self.session.submit_guess(raw)
    }

    /// Answer the play-again prompt
    ///
    /// `None` means the input closed. A yes starts a fresh puzzle and returns `true`;
    /// anything else ends the game. Ignored while a puzzle is still in progress.
    pub fn play_again(&mut self, answer: Option<&str>) -> bool {
        if !matches!(
            self.state(),
            SessionState::PuzzleComplete | SessionState::PuzzleAbandoned
        ) {
            return false;
        }

        if answer.is_some_and(wants_another) {
            self.session = Session::generate(self.dictionary, &self.pool, &mut self.rng);
            self.puzzles += 1;
            true
        } else {
            self.end();
            false
        }
    }

    /// End the game, e.g. because the input stream closed
    pub fn end(&mut self) {
        if !self.ended {
            debug!(puzzles = self.puzzles, "game ended");
        }
        self.ended = true;
    }
}
