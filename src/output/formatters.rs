//! Formatting utilities for puzzle text output

use crate::core::LetterSet;
use crate::puzzle::{BucketView, WordView};
use std::fmt::Write;

/// Words per row in the word table
pub const TABLE_COLUMNS: usize = 4;

/// Width each word cell is padded to
pub const CELL_WIDTH: usize = 10;

/// Lay the seven letters out in a diamond
///
/// ```text
///      A
///    B   C
///   D     E
///    F   G
/// ```
#[must_use]
pub fn letter_diamond(letters: &LetterSet) -> String {
    let [a, b, c, d, e, f, g] = (*letters.as_bytes()).map(char::from);
    format!("     {a}\n   {b}   {c}\n  {d}     {e}\n   {f}   {g}\n")
}

/// Hide a word behind its first letter and dashes
#[must_use]
pub fn placeholder(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut hidden = String::with_capacity(text.len());
            hidden.push(first);
            hidden.extend(chars.map(|_| '-'));
            hidden
        }
        None => String::new(),
    }
}

/// The word as shown in the table: in full once found, hidden otherwise
#[must_use]
pub fn word_cell(word: &WordView<'_>) -> String {
    if word.found {
        word.text.to_string()
    } else {
        placeholder(word.text)
    }
}

/// Render every bucket as a heading followed by rows of word cells
#[must_use]
pub fn word_table(snapshot: &[BucketView<'_>]) -> String {
    let mut table = String::new();

    for bucket in snapshot {
        let _ = writeln!(table, "--- {}-letter words ---", bucket.length);

        for row in bucket.words.chunks(TABLE_COLUMNS) {
            let line: String = row
                .iter()
                .map(|w| format!("{:<CELL_WIDTH$}", word_cell(w)))
                .collect();
            table.push_str(line.trim_end());
            table.push('\n');
        }
    }

    table
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (done * width / total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
