//! TUI rendering with ratatui
//!
//! Tile board, keyboard hints and message panel.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::{KeyboardHints, Session};
use crate::source::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: WordSource + 'static>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLY 🟨")
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

fn render_play_area<S: WordSource + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let board_height = u16::try_from(app.config().rounds * 2 + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(board_height), // Board
            Constraint::Length(5),         // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, &app.keyboard_hints(), chunks[1]);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::new()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn board_lines(session: &Session, invalid_guess: bool) -> Vec<Line<'static>> {
    let config = session.config();
    let empty_style = Style::default().bg(Color::Black).fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(config.rounds * 2);

    for row in session.history() {
        let spans: Vec<Span> = row
            .word
            .text()
            .chars()
            .zip(row.feedback.verdicts())
            .flat_map(|(letter, &verdict)| tile(letter, verdict_style(verdict)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !session.status().is_finished() {
        let typed_style = if invalid_guess {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD)
        };

        let typed = session.guess().as_str().chars();
        let padding = config.answer_length.saturating_sub(session.guess().len());
        let spans: Vec<Span> = typed
            .map(|c| (c, typed_style))
            .chain(std::iter::repeat_n(('·', empty_style), padding))
            .flat_map(|(letter, style)| tile(letter, style))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let shown = session.history().len() + usize::from(!session.status().is_finished());
    for _ in shown..config.rounds {
        let spans: Vec<Span> = (0..config.answer_length)
            .flat_map(|_| tile('·', empty_style))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<S: WordSource + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = match app.session.as_ref() {
        Some(session) => board_lines(session, app.invalid_guess),
        None if app.loading => vec![Line::from("Fetching today's word...")],
        None => vec![Line::from("No game. Press 'n' to start one.")],
    };

    let title = app.session.as_ref().map_or_else(
        || " Board ".to_string(),
        |s| format!(" Board - row {}/{} ", s.row().min(s.config().rounds), s.config().rounds),
    );

    let board = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, hints: &KeyboardHints, area: Rect) {
    let unknown = Style::default().fg(Color::White).bg(Color::Gray);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| tile(letter, hints.get(letter).map_or(unknown, verdict_style)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<S: WordSource + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
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

fn render_status<S: WordSource + 'static>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state_text = if app.is_busy() {
        "⏳ Checking..."
    } else {
        "Ready"
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let finished = app
        .session
        .as_ref()
        .is_none_or(|s| s.status().is_finished());
    let help_text = if finished {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
