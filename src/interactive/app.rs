//! TUI application state and logic

use crate::game::{MAX_GUESSES, Outcome, Session};
use crate::settings::{Settings, Theme};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// Application state
pub struct App<R> {
    pub session: Session<R>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub theme: Theme,
    pub settings_path: Option<PathBuf>,
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

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>, theme: Theme, settings_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
            theme,
            settings_path,
        };
        app.add_message(
            &format!("Guess the word in {MAX_GUESSES} tries. Type letters, Enter to submit."),
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('q') if self.session.round().is_over() => self.should_quit = true,
            KeyCode::Char('n') if self.session.round().is_over() => self.new_round(),
            KeyCode::Char(c) if !ctrl => {
                self.session.round_mut().stage_letter(c);
            }
            KeyCode::Backspace => {
                self.session.round_mut().unstage_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(submission) => match submission.outcome {
                Some(Outcome::Won { guesses }) => {
                    self.add_message(
                        &format!("Nice! You got it in {guesses}/{MAX_GUESSES} guesses."),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
                }
                Some(Outcome::Lost { secret }) => {
                    self.add_message(
                        &format!(
                            "Out of guesses! The word was: {}",
                            secret.text().to_uppercase()
                        ),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
                }
                None => {}
            },
            Err(reason) => self.add_message(&reason.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_round(&mut self) {
        self.session.new_round();
        self.messages.clear();
        self.add_message("New word picked!", MessageStyle::Info);
    }

    /// Switch theme and persist the choice
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(path) = &self.settings_path {
            let settings = Settings { theme: self.theme };
            if let Err(err) = settings.save(path) {
                warn!("{err}");
                self.add_message("Could not save theme preference", MessageStyle::Error);
            }
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
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
    use crate::core::Word;
    use crate::game::RoundState;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn app(settings_path: Option<PathBuf>) -> App<StdRng> {
        let session = Session::with_secret(
            Vocabulary::load("crane\ntrace\nslate\n"),
            StdRng::seed_from_u64(11),
            Word::new("crane").unwrap(),
        );
        App::new(session, Theme::Light, settings_path)
    }

    fn press(app: &mut App<StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<StdRng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_backspace_edit_staged_letters() {
        let mut app = app(None);
        type_word(&mut app, "cra7");
        assert_eq!(app.session.round().staged(), "cra");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.round().staged(), "cr");
    }

    #[test]
    fn enter_with_unknown_word_shows_error() {
        let mut app = app(None);
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("zzzzz"));
        assert_eq!(app.session.round().staged(), "zzzzz");
    }

    #[test]
    fn winning_then_n_starts_new_round() {
        let mut app = app(None);
        type_word(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.round().state(), RoundState::Won);
        assert!(app.messages.iter().any(|m| m.text.contains("2/6")));

        // Letters are ignored once the round is over, except the commands
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.round().state(), RoundState::Ongoing);
        assert_eq!(app.session.round().attempts(), 0);
    }

    #[test]
    fn n_is_a_letter_while_playing() {
        let mut app = app(None);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.session.round().staged(), "nq");
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_n_restarts_mid_round() {
        let mut app = app(None);
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'n');
        assert_eq!(app.session.round().attempts(), 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut escaped = app(None);
        press(&mut escaped, KeyCode::Esc);
        assert!(escaped.should_quit);

        let mut interrupted = app(None);
        ctrl(&mut interrupted, 'c');
        assert!(interrupted.should_quit);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.ron");
        let mut app = app(Some(path.clone()));

        ctrl(&mut app, 't');
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(Settings::load(&path).unwrap().theme, Theme::Dark);
    }
}
