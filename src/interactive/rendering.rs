//! TUI rendering with ratatui
//!
//! Letter diamond, word table, input box and message log.

use super::app::{App, MessageStyle};
use crate::output::formatters::{CELL_WIDTH, TABLE_COLUMNS, letter_diamond, word_cell};
use crate::puzzle::SessionState;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Letters and words
            Constraint::Length(3), // Input area
            Constraint::Length(7), // Messages
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Letters
            Constraint::Min(30),    // Words
        ])
        .split(chunks[1]);

    render_letters(f, app, main_chunks[0]);
    render_words(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ZEN WORD - find every word in seven letters")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_letters<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3)])
        .split(area);

    let session = app.game.session();
    let lines: Vec<Line> = letter_diamond(session.letters())
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();

    let diamond = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(diamond, chunks[0]);

    let index = session.index();
    let found = index.total_found();
    let total = index.total_words();
    let percent = if total == 0 {
        100
    } else {
        (found * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{found}/{total}"));
    f.render_widget(gauge, chunks[1]);
}

fn render_words<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for bucket in app.game.session().snapshot() {
        lines.push(Line::from(Span::styled(
            format!(
                "{}-letter words ({}/{})",
                bucket.length,
                bucket.found(),
                bucket.words.len()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for row in bucket.words.chunks(TABLE_COLUMNS) {
            let spans: Vec<Span> = row
                .iter()
                .map(|w| {
                    let style = if w.found {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    Span::styled(format!("{:<CELL_WIDTH$}", word_cell(w)), style)
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from("No words can be made from these letters."));
    }

    let words = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(words, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, color) = match app.game.state() {
        SessionState::AwaitingGuess => {
            (" Enter a word | Esc: give up | Ctrl-C: quit ", Color::Yellow)
        }
        SessionState::PuzzleComplete | SessionState::PuzzleAbandoned => {
            (" Play another puzzle? y: yes | n: quit ", Color::Green)
        }
        SessionState::SessionEnded => (" Goodbye ", Color::DarkGray),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPool;
    use crate::puzzle::Game;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_letters_and_placeholders() {
        let dictionary = Dictionary::from_words(&["CAT", "DOG", "GOAT"]);
        let pool = LetterPool::new("ABCDOGT").unwrap();
        let mut app = App::new(Game::with_pool(&dictionary, pool, StdRng::seed_from_u64(0)));
        app.input_buffer = "DOG".to_string();
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("3-letter words (1/2)"));
        assert!(text.contains("C--"));
        assert!(text.contains("G---"));
        assert!(text.contains("Good find!"));
    }
}
