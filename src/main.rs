//! Zen Word - CLI
//!
//! Seven random letters, one dictionary: find every word the letters can spell.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use zen_word::{
    commands::run_play,
    config::GameConfig,
    puzzle::Game,
    wordlists::{DEFAULT_MAX_WORD_LEN, Dictionary, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "zen_word",
    about = "Find every dictionary word hidden in seven random letters",
    version,
    author
)]
struct Cli {
    /// Dictionary file, one word per line
    dictionary: PathBuf,

    /// Skip dictionary lines longer than this many characters
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,

    /// Seed the letter generator for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Full-screen interface instead of the line prompt
    #[arg(short, long)]
    tui: bool,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            dictionary: cli.dictionary,
            max_word_len: cli.max_word_len,
            seed: cli.seed,
            tui: cli.tui,
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = i32::from(err.use_stderr());
            // Nothing left to report to if stderr itself is gone
            err.print().ok();
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = GameConfig::from(cli);
    let dictionary = load_with_progress(&config)?;

    let game = Game::new(&dictionary, config.rng());

    if config.tui {
        use zen_word::interactive::{App, run_tui};
        run_tui(App::new(game))
    } else {
        run_play_command(game)
    }
}

fn load_with_progress(config: &GameConfig) -> Result<Dictionary> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Reading {}", config.dictionary.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load_dictionary(&config.dictionary, config.max_word_len);

    match &result {
        Ok(dictionary) => spinner.finish_with_message(format!(
            "Finished reading {} words from the dictionary",
            dictionary.len()
        )),
        Err(_) => spinner.finish_and_clear(),
    }

    result.with_context(|| format!("Failed to load dictionary {}", config.dictionary.display()))
}

fn run_play_command<R: rand::Rng>(mut game: Game<'_, R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play(&mut game, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
