//! Word Guess - CLI
//!
//! Terminal word-guessing puzzle with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use wordle_game::{
    commands::{run_simple, score_guess},
    game::Session,
    interactive::{App, run_tui},
    output::print_score_result,
    settings::{Settings, Theme},
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Display theme; the choice is saved for next time
    #[arg(long, global = true, value_enum)]
    theme: Option<Theme>,

    /// Settings file (default: $XDG_CONFIG_HOME/wordle_game/settings.ron)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Log file written next to the settings while the TUI owns the terminal
const LOG_FILE: &str = "wordle.log";

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode: one guess per line on stdin
    Simple,

    /// Show the feedback a guess would get against a secret
    Score {
        /// The hidden word
        secret: String,

        /// The guess to judge
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings_path = cli.settings.clone().or_else(Settings::default_path);

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(&cli, settings_path.as_deref());

    // Default to Play mode if no command given
    match &cli.command {
        Some(Commands::Score { secret, guess }) => run_score_command(secret, guess),
        Some(Commands::Simple) => {
            let mut session = new_session(&cli)?;
            run_simple(&mut session)
        }
        Some(Commands::Play) | None => run_play_command(&cli, settings_path),
    }
}

/// Where log lines end up for a given command
#[derive(Debug, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

/// The TUI draws on the terminal, so `play` logs to a file beside the
/// settings (or nowhere); the line modes keep stderr.
fn log_target(command: Option<&Commands>, settings_path: Option<&Path>) -> LogTarget {
    match command {
        Some(Commands::Play) | None => settings_path
            .and_then(Path::parent)
            .map_or(LogTarget::Discard, |dir| LogTarget::File(dir.join(LOG_FILE))),
        Some(Commands::Simple | Commands::Score { .. }) => LogTarget::Stderr,
    }
}

fn init_logging(cli: &Cli, settings_path: Option<&Path>) -> Option<WorkerGuard> {
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let target = match log_target(cli.command.as_ref(), settings_path) {
        LogTarget::File(path)
            if path
                .parent()
                .is_some_and(|dir| std::fs::create_dir_all(dir).is_err()) =>
        {
            LogTarget::Discard
        }
        target => target,
    };

    let (writer, guard, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), None, true),
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), None, false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .init();

    guard
}

/// Load the word list based on the -w flag
fn load_vocabulary(wordlist: Option<&Path>) -> Result<Vocabulary> {
    match wordlist {
        Some(path) => Vocabulary::load_from_file(path)
            .with_context(|| format!("Failed to load word list '{}'", path.display())),
        None => Ok(Vocabulary::embedded()),
    }
}

fn new_session(cli: &Cli) -> Result<Session<StdRng>> {
    let vocabulary = load_vocabulary(cli.wordlist.as_deref())?;
    tracing::info!(words = vocabulary.len(), "Vocabulary ready");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(Session::new(vocabulary, rng))
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score_result(&result.guess, &result.secret, &result.feedback);
    Ok(())
}

fn run_play_command(cli: &Cli, settings_path: Option<PathBuf>) -> Result<()> {
    let mut settings = settings_path
        .as_deref()
        .map(Settings::load_or_default)
        .unwrap_or_default();

    if let Some(theme) = cli.theme {
        settings.theme = theme;
        if let Some(path) = &settings_path
            && let Err(err) = settings.save(path)
        {
            tracing::warn!("{err}");
        }
    }

    let session = new_session(cli)?;
    let app = App::new(session, settings.theme, settings_path);
    run_tui(app)
}
