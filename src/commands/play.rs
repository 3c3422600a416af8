//! Line-oriented play loop
//!
//! Text-based game over any buffered reader and writer, so the same loop drives stdin
//! and scripted tests.

use crate::output::{print_banner, print_completion, print_outcome, print_puzzle};
use crate::puzzle::{Game, GuessOutcome, SessionState};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run puzzles until the player declines another one or input runs out
///
/// # Errors
///
/// Returns an error only if writing to `out` fails. A closed or failing input ends the
/// game quietly.
pub fn run_play<R: Rng, I: BufRead, W: Write>(
    game: &mut Game<'_, R>,
    input: &mut I,
    out: &mut W,
) -> io::Result<()> {
    print_banner(out)?;
    print_puzzle(out, game.session())?;

    loop {
        match game.state() {
            SessionState::SessionEnded => break,
            SessionState::AwaitingGuess => {
                let prompt = "Enter a word (or 'Q' to quit this puzzle)";
                let Some(line) = get_user_input(input, out, prompt)? else {
                    writeln!(out, "\nInput closed. Exiting puzzle.")?;
                    game.end();
                    continue;
                };

                let outcome = game.submit_guess(&line);
                if outcome != GuessOutcome::Quit {
                    print_outcome(out, &outcome)?;
                    print_puzzle(out, game.session())?;
                }
            }
            SessionState::PuzzleComplete | SessionState::PuzzleAbandoned => {
                if game.state() == SessionState::PuzzleComplete {
                    print_completion(out, game.session())?;
                }

                let answer = get_user_input(input, out, "Play another puzzle? (Y/N)")?;
                if game.play_again(answer.as_deref()) {
                    writeln!(out, "\nNew puzzle!")?;
                    print_puzzle(out, game.session())?;
                }
            }
        }
    }

    writeln!(out, "\nThanks for playing!")
}

/// Prompt and read one line
///
/// Returns `None` when the input is exhausted or unreadable.
fn get_user_input<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "\n{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line)),
        Err(e) => {
            warn!(error = %e, "failed to read input");
            Ok(None)
        }
    }
}
