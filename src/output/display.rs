//! Display functions for puzzle state and guess feedback

use super::formatters::{create_progress_bar, letter_diamond, word_table};
use crate::puzzle::{GuessOutcome, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Text shown for a guess outcome, if any
#[must_use]
pub fn outcome_message(outcome: &GuessOutcome) -> Option<&'static str> {
    match outcome {
        GuessOutcome::Found(_) => Some("Good find!"),
        GuessOutcome::AlreadyFound(_) => Some("You already found that word."),
        GuessOutcome::CannotForm(_) => Some("That word cannot be formed from these letters!"),
        GuessOutcome::NotInList(_) => Some("That word is not in the list of valid words."),
        GuessOutcome::Quit | GuessOutcome::NotAccepting => None,
    }
}

/// Print the title banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {}", "ZEN WORD".bright_cyan().bold())?;
    writeln!(out, " Find every word hidden in seven letters")?;
    writeln!(out, "{}", "═".repeat(40).cyan())
}

/// Print the letters, the word table, and overall progress
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_puzzle(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let index = session.index();

    writeln!(out)?;
    write!(
        out,
        "{}",
        letter_diamond(session.letters()).bright_yellow().bold()
    )?;
    writeln!(out)?;
    write!(out, "{}", word_table(&session.snapshot()))?;

    let found = index.total_found();
    let total = index.total_words();
    writeln!(
        out,
        "\n[{}] {found}/{total} words",
        create_progress_bar(found, total, 20).green()
    )
}

/// Print feedback for one guess
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome(out: &mut impl Write, outcome: &GuessOutcome) -> io::Result<()> {
    let Some(message) = outcome_message(outcome) else {
        return Ok(());
    };

    let styled = match outcome {
        GuessOutcome::Found(_) => message.green().bold(),
        GuessOutcome::AlreadyFound(_) => message.yellow(),
        _ => message.red(),
    };
    writeln!(out, "\n{styled}")
}

/// Print the end-of-puzzle message
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_completion(out: &mut impl Write, session: &Session) -> io::Result<()> {
    if session.index().is_empty() {
        writeln!(
            out,
            "\n{}",
            "These letters don't make any words. Nothing to find!".yellow()
        )
    } else {
        writeln!(
            out,
            "\n{}",
            "Congratulations! You found all the words!".green().bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::wordlists::Dictionary;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn setup_session() -> Session {
        let dictionary = Dictionary::from_words(&["CAT", "DOG", "GOAT"]);
        Session::new(&dictionary, LetterSet::new("ABCDOGT").unwrap())
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message(&GuessOutcome::Found("CAT".into())),
            Some("Good find!")
        );
        assert_eq!(
            outcome_message(&GuessOutcome::CannotForm("ZZZ".into())),
            Some("That word cannot be formed from these letters!")
        );
        assert_eq!(
            outcome_message(&GuessOutcome::NotInList("TAB".into())),
            Some("That word is not in the list of valid words.")
        );
        assert_eq!(outcome_message(&GuessOutcome::Quit), None);
    }

    #[test]
    fn puzzle_shows_placeholders_and_found_words() {
        let mut session = setup_session();
        session.submit_guess("dog");

        let text = render(|out| print_puzzle(out, &session));
        assert!(text.contains("--- 3-letter words ---"));
        assert!(text.contains("C--"));
        assert!(text.contains("DOG"));
        assert!(text.contains("G---"));
        assert!(text.contains("1/3 words"));
    }

    #[test]
    fn silent_outcomes_print_nothing() {
        let text = render(|out| print_outcome(out, &GuessOutcome::NotAccepting));
        assert!(text.is_empty());
    }

    #[test]
    fn completion_message_for_empty_puzzle() {
        let dictionary = Dictionary::from_words(&["ZZZ"]);
        let session = Session::new(&dictionary, LetterSet::new("ABCDOGT").unwrap());

        let text = render(|out| print_completion(out, &session));
        assert!(text.contains("Nothing to find"));
    }
}
