//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use crate::game::{Session, SessionStatus};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn colored_tile(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// Render a word with its feedback as a row of colored tiles
#[must_use]
pub fn colored_row(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| colored_tile(letter, verdict).to_string())
        .collect()
}

/// Emoji summary of a game, suitable for sharing
///
/// Shows `X` as the score for a lost game and `-` while still in progress.
#[must_use]
pub fn share_text(session: &Session) -> String {
    let score = match session.status() {
        SessionStatus::Won => session.row().to_string(),
        SessionStatus::Lost => "X".to_string(),
        SessionStatus::InProgress => "-".to_string(),
    };

    let mut text = format!("Wordly {score}/{}\n", session.config().rounds);
    for row in session.history() {
        text.push('\n');
        text.push_str(&row.feedback.to_emoji());
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
