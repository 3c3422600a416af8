//! Puzzle state
//!
//! The word index built for a letter set, and the session logic that plays it.

pub mod index;
pub mod session;

pub use index::{BucketView, MIN_WORD_LEN, PuzzleIndex, PuzzleWord, WordView};
pub use session::{
    Game, GuessOutcome, QUIT_SENTINEL, Session, SessionState, normalize_guess, wants_another,
};
