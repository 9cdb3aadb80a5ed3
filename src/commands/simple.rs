//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole word per line.

use crate::error::GameError;
use crate::game::{GameConfig, Session, Statistics, SubmitResult};
use crate::output::{print_board, print_game_over, print_statistics};
use crate::source::WordSource;
use anyhow::Result;
use std::io::{self, Write};
use tracing::info;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails, the word source cannot provide a
/// secret, or the secret it provides is unplayable.
pub async fn run_simple<S: WordSource>(source: &S, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordly - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries. Type a word and press Enter.",
        config.answer_length, config.rounds
    );
    println!("Commands: 'quit' to exit, 'new' to give up and start over\n");

    let mut stats = Statistics::default();

    'games: loop {
        let secret = source
            .fetch_word_of_day()
            .await
            .map_err(GameError::SourceUnavailable)?;
        let mut session = Session::new(&secret, config)?;
        info!("new line-mode game");

        while !session.status().is_finished() {
            print_board(&session);

            let Some(input) = get_user_input(&format!("Guess {}", session.row() + 1))? else {
                break 'games;
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => break 'games,
                "new" | "n" => {
                    println!("\nThe word was {}\n", session.secret());
                    continue 'games;
                }
                _ => {}
            }

            if input.chars().count() != config.answer_length {
                println!("❌ Word must be exactly {} letters!", config.answer_length);
                continue;
            }

            while !session.guess().is_empty() {
                session.backspace();
            }
            for ch in input.chars() {
                session.append_letter(ch);
            }

            match session.submit_guess(source).await {
                Ok(SubmitResult::NotReady) => {
                    println!("❌ Only letters A-Z are allowed!");
                }
                Ok(SubmitResult::InvalidWord) => {
                    println!("❌ {} is not in the word list", input.to_uppercase());
                }
                Ok(SubmitResult::Evaluated { .. }) => {}
                Err(GameError::SourceUnavailable(err)) => {
                    println!("⚠️  Could not check the word ({err}). Try again.");
                }
                Err(other) => return Err(other.into()),
            }
        }

        if session.status().is_finished() {
            print_board(&session);
            print_game_over(&session);
            stats.record(&session);
            print_statistics(&stats);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {}
                _ => break,
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
