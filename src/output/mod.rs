//! Terminal output formatting
//!
//! Renders puzzle letters, word progress, and guess feedback as text.

pub mod display;
pub mod formatters;

pub use display::{outcome_message, print_banner, print_completion, print_outcome, print_puzzle};
