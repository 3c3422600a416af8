//! TUI application state and logic

use crate::output::outcome_message;
use crate::puzzle::{Game, GuessOutcome, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'d, R: Rng> {
    pub game: Game<'d, R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'d, R: Rng> App<'d, R> {
    #[must_use]
    pub fn new(game: Game<'d, R>) -> Self {
        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a word and press Enter. Esc gives up on the puzzle.",
            MessageStyle::Info,
        );
        app.announce_end_of_puzzle();
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        let outcome = self.game.submit_guess(&guess);

        if let Some(text) = outcome_message(&outcome) {
            let style = match outcome {
                GuessOutcome::Found(_) => MessageStyle::Success,
                GuessOutcome::AlreadyFound(_) => MessageStyle::Info,
                _ => MessageStyle::Error,
            };
            self.add_message(text, style);
        }

        self.announce_end_of_puzzle();
    }

    fn announce_end_of_puzzle(&mut self) {
        match self.game.state() {
            SessionState::PuzzleComplete => {
                if self.game.session().index().is_empty() {
                    self.add_message("These letters don't make any words.", MessageStyle::Info);
                } else {
                    self.add_message(
                        "Congratulations! You found all the words!",
                        MessageStyle::Success,
                    );
                }
                self.add_message("Play another puzzle? (y/n)", MessageStyle::Info);
            }
            SessionState::PuzzleAbandoned => {
                self.add_message("Puzzle abandoned. Play another? (y/n)", MessageStyle::Info);
            }
            SessionState::AwaitingGuess | SessionState::SessionEnded => {}
        }
    }

    /// Answer the play-again question
    pub fn play_again(&mut self, yes: bool) {
        let answer = if yes { "y" } else { "n" };
        if self.game.play_again(Some(answer)) {
            self.messages.clear();
            self.add_message("New puzzle!", MessageStyle::Info);
            self.announce_end_of_puzzle();
        }
        if self.game.state() == SessionState::SessionEnded {
            self.should_quit = true;
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.game.end();
            self.should_quit = true;
            return;
        }

        match self.game.state() {
            SessionState::AwaitingGuess => match key.code {
                KeyCode::Char(c) if c.is_alphabetic() => {
                    self.input_buffer.extend(c.to_uppercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Esc => {
                    self.input_buffer = "Q".to_string();
                    self.submit_guess();
                }
                _ => {}
            },
            SessionState::PuzzleComplete | SessionState::PuzzleAbandoned => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.play_again(true),
                KeyCode::Char('n' | 'N' | 'q' | 'Q') | KeyCode::Esc => self.play_again(false),
                _ => {}
            },
            SessionState::SessionEnded => self.should_quit = true,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPool;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word<R: Rng>(app: &mut App<'_, R>, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn setup_app(dictionary: &Dictionary) -> App<'_, StdRng> {
        let pool = LetterPool::new("ABCDOGT").unwrap();
        App::new(Game::with_pool(dictionary, pool, StdRng::seed_from_u64(0)))
    }

    #[test]
    fn typing_builds_uppercase_buffer() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG"]);
        let mut app = setup_app(&dictionary);

        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.input_buffer, "CA");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "C");
    }

    #[test]
    fn finding_all_words_offers_another_puzzle() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG"]);
        let mut app = setup_app(&dictionary);

        type_word(&mut app, "cat");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);

        type_word(&mut app, "dog");
        assert_eq!(app.game.state(), SessionState::PuzzleComplete);
        assert!(app.messages.iter().any(|m| m.text.contains("Congratulations")));

        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.game.state(), SessionState::AwaitingGuess);
        assert_eq!(app.game.puzzles(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn wrong_guess_is_reported_as_error() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG"]);
        let mut app = setup_app(&dictionary);

        type_word(&mut app, "zzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("cannot be formed"));
    }

    #[test]
    fn escape_abandons_and_no_quits() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG"]);
        let mut app = setup_app(&dictionary);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.game.state(), SessionState::PuzzleAbandoned);

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.game.state(), SessionState::SessionEnded);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG"]);
        let mut app = setup_app(&dictionary);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.game.state(), SessionState::SessionEnded);
    }

    #[test]
    fn message_log_is_bounded() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG"]);
        let mut app = setup_app(&dictionary);

        for _ in 0..10 {
            type_word(&mut app, "zzz");
        }
        assert_eq!(app.messages.len(), 5);
    }
}
