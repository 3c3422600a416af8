//! Dictionary word lists
//!
//! Loads the word list that every puzzle is matched against.

pub mod loader;

pub use loader::{DEFAULT_MAX_WORD_LEN, Dictionary, LoadError, load_dictionary};
