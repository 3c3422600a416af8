//! Zen Word
//!
//! A seven-letter word puzzle: draw letters, find every dictionary word they can spell.
//!
//! # Quick Start
//!
//! ```rust
//! use zen_word::core::LetterSet;
//! use zen_word::puzzle::{GuessOutcome, Session};
//! use zen_word::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(&["cat", "dog", "abcdefg", "at"]);
//! let letters = LetterSet::new("ABCDOGT").unwrap();
//!
//! let mut session = Session::new(&dictionary, letters);
//! assert_eq!(session.submit_guess("cat"), GuessOutcome::Found("CAT".to_string()));
//! assert!(!session.is_complete());
//! ```

// Core domain types
pub mod core;

// Word index and session state
pub mod puzzle;

// Dictionary loading
pub mod wordlists;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
