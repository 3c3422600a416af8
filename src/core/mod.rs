//! Core domain types for the letter puzzle
//!
//! Pure, dependency-light building blocks: letter sets, the weighted sampler, and the
//! construction test used to match dictionary words against a puzzle.

mod letters;
mod matcher;

pub use letters::{
    LETTER_COUNT, LetterPool, LetterSet, LetterSetError, MIN_VOWELS, PoolError, STANDARD_POOL,
    VOWELS, generate_letters, is_vowel,
};
pub use matcher::can_form;
