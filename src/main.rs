//! Wordly - CLI
//!
//! Word-guessing game with TUI and line modes, playable offline or against a
//! remote words API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use wordly::{
    commands::{run_simple, score_words},
    game::{ANSWER_LENGTH, GameConfig, ROUNDS},
    logging::{LogTarget, init_tracing},
    output::print_score_result,
    source::{
        AnySource, DEFAULT_API_URL, EmbeddedWordSource, HttpConfig, HttpWordSource, SecretPick,
    },
    wordlists::{ALLOWED, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordly",
    about = "Guess the hidden word in a handful of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = ANSWER_LENGTH, value_parser = parse_positive)]
    length: usize,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = ROUNDS, value_parser = parse_positive)]
    rounds: usize,

    /// Where secrets and dictionary checks come from
    #[arg(short, long, global = true, value_enum, default_value_t = SourceKind::Offline)]
    source: SourceKind,

    /// Base URL of the words API (http source)
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// HTTP request timeout in seconds (http source)
    #[arg(long, global = true, default_value_t = 10)]
    timeout: u64,

    /// Pick a random secret per game from this seed instead of the daily word (offline source)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pick a fresh random secret per game instead of the daily word (offline source)
    #[arg(long, global = true)]
    random: bool,

    /// Answer list to draw secrets from, one word per line (offline source)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: type a whole word per line
    Simple,

    /// Score a single guess against a secret
    Score {
        /// The hidden word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// Bundled word lists, no network
    Offline,
    /// Remote words API
    Http,
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    fn pick(&self) -> SecretPick {
        match (self.seed, self.random) {
            (Some(seed), _) => SecretPick::Random(Some(seed)),
            (None, true) => SecretPick::Random(None),
            (None, false) => SecretPick::Daily,
        }
    }
}

/// Build the word source selected on the command line
fn build_source(cli: &Cli) -> Result<AnySource> {
    match cli.source {
        SourceKind::Http => {
            let config = HttpConfig {
                base_url: cli.api_url.clone(),
                timeout: Duration::from_secs(cli.timeout),
            };
            debug!(base_url = %config.base_url, "using http word source");
            Ok(AnySource::Http(HttpWordSource::new(config)?))
        }
        SourceKind::Offline => {
            let source = match &cli.wordlist {
                Some(path) => {
                    let answers = load_from_file(path, cli.length)
                        .with_context(|| format!("Failed to read word list {}", path.display()))?;
                    let allowed = words_from_slice(ALLOWED, cli.length);
                    EmbeddedWordSource::new(answers, &allowed, cli.length, cli.pick())?
                }
                None => EmbeddedWordSource::bundled(cli.length, cli.pick())?,
            };
            debug!(words = source.dictionary_size(), "using offline word source");
            Ok(AnySource::Embedded(source))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let target = match command {
        Commands::Play => LogTarget::FileOnly,
        Commands::Simple | Commands::Score { .. } => LogTarget::Stderr,
    };
    init_tracing(cli.log_file.as_deref(), target);

    let config = GameConfig::new(cli.length, cli.rounds);

    match command {
        Commands::Play => {
            use wordly::interactive::{App, run_tui};

            let source = build_source(&cli)?;
            run_tui(App::new(Arc::new(source), config)).await
        }
        Commands::Simple => {
            let source = build_source(&cli)?;
            run_simple(&source, config).await
        }
        Commands::Score { secret, guess } => {
            let result = score_words(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result.secret, &result.guess, &result.feedback);
            Ok(())
        }
    }
}
