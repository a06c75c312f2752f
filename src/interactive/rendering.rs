//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{Judgment, KEYBOARD_ROWS, WORD_LENGTH};
use crate::game::{MAX_GUESSES, Round, RoundState};
use crate::settings::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Base colors for a theme
struct Palette {
    foreground: Color,
    background: Color,
    accent: Color,
}

impl Palette {
    const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                foreground: Color::Black,
                background: Color::White,
                accent: Color::Blue,
            },
            Theme::Dark => Self {
                foreground: Color::White,
                background: Color::Black,
                accent: Color::Cyan,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }
}

fn judgment_style(judgment: Option<Judgment>, palette: &Palette) -> Style {
    let style = match judgment {
        Some(Judgment::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Judgment::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Judgment::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => palette.base(),
    };
    style.add_modifier(Modifier::BOLD)
}

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<R>) {
    let palette = Palette::for_theme(app.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(MAX_GUESSES as u16 + 2),         // Board
            Constraint::Length(KEYBOARD_ROWS.len() as u16 + 2), // Keyboard
            Constraint::Min(4),                                 // Messages
            Constraint::Length(1),                              // Status bar
        ])
        .split(f.area());

    let round = app.session.round();
    render_header(f, chunks[0], &palette);
    render_board(f, round, chunks[1], &palette);
    render_keyboard(f, round, chunks[2], &palette);
    render_messages(f, app, chunks[3], &palette);
    render_status(f, app, chunks[4], &palette);
}

fn render_header(f: &mut Frame, area: Rect, palette: &Palette) {
    let header = Paragraph::new("WORD GUESS")
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(palette.base().fg(palette.accent)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, round: &Round, area: Rect, palette: &Palette) {
    let staged = round.staged();
    let mut lines: Vec<Line> = round
        .history()
        .iter()
        .map(|record| {
            let spans: Vec<Span> = record
                .guess
                .text()
                .chars()
                .zip(record.feedback.judgments())
                .map(|(letter, &judgment)| tile(letter, Some(judgment), palette))
                .collect();
            Line::from(spans)
        })
        .collect();

    if round.state() == RoundState::Ongoing {
        let mut spans: Vec<Span> = staged
            .chars()
            .map(|letter| tile(letter, None, palette))
            .collect();
        spans.extend((staged.len()..WORD_LENGTH).map(|_| empty_tile(palette)));
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_GUESSES {
        lines.push(Line::from(
            (0..WORD_LENGTH).map(|_| empty_tile(palette)).collect::<Vec<_>>(),
        ));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(palette.base())
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn tile(letter: char, judgment: Option<Judgment>, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        judgment_style(judgment, palette),
    )
}

fn empty_tile(palette: &Palette) -> Span<'static> {
    Span::styled(" _ ", palette.base().fg(Color::DarkGray))
}

fn render_keyboard(f: &mut Frame, round: &Round, area: Rect, palette: &Palette) {
    let hints = round.key_hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| tile(letter, hints.get(letter), palette))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(palette.base())
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_messages<R>(f: &mut Frame, app: &App<R>, area: Rect, palette: &Palette) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => palette.base(),
                MessageStyle::Success => palette.base().fg(Color::Green),
                MessageStyle::Error => palette.base().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages)
        .style(palette.base())
        .block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R>(f: &mut Frame, app: &App<R>, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let round = app.session.round();
    let score = Paragraph::new(format!("Score: {}/{MAX_GUESSES}", round.attempts()))
        .style(palette.base())
        .alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let theme = Paragraph::new(format!("Theme: {:?}", app.theme))
        .style(palette.base())
        .alignment(Alignment::Center);
    f.render_widget(theme, chunks[1]);

    let help_text = if round.is_over() {
        "n: New Word | q: Quit | ^T: Theme"
    } else {
        "Enter: Submit | ⌫: Delete | ^N: New Word | ^T: Theme | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(palette.base().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
