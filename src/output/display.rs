//! Display functions for line-mode play and command results

use super::formatters::{colored_row, create_progress_bar, share_text};
use crate::core::Feedback;
use crate::game::{Session, SessionStatus, Statistics};
use colored::Colorize;

/// Print every submitted row followed by blank rows for the attempts left
pub fn print_board(session: &Session) {
    println!();
    for row in session.history() {
        println!("  {}", colored_row(row.word.text(), &row.feedback));
    }

    let remaining = session
        .config()
        .rounds
        .saturating_sub(session.history().len());
    let blank = " _ ".repeat(session.config().answer_length);
    for _ in 0..remaining {
        println!("  {}", blank.bright_black());
    }
    println!();
}

/// Print the result of scoring one guess against a secret
pub fn print_score_result(secret: &str, guess: &str, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.bright_yellow().bold(),
        guess.bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(guess, feedback));
    println!("  {feedback}");
    println!(
        "  {} correct, {} present\n",
        feedback.count_correct(),
        feedback.count_present()
    );
}

/// Print the end-of-game banner and share text
pub fn print_game_over(session: &Session) {
    println!("{}", "═".repeat(40).bright_cyan());
    match session.status() {
        SessionStatus::Won => println!(
            "{}",
            format!("🎉 Solved in {}!", guesses_label(session.row()))
                .green()
                .bold()
        ),
        SessionStatus::Lost => println!(
            "{} {}",
            "❌ Out of guesses! The word was".red().bold(),
            session.secret().text().bright_yellow().bold()
        ),
        SessionStatus::InProgress => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", share_text(session));
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:   {}", stats.total_games);
    println!("   Win rate: {:.0}%", stats.win_rate());

    let best = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, best, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}

fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
