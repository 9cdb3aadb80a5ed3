//! TUI application state and logic

use crate::error::GameError;
use crate::game::{
    GameConfig, InputOutcome, KeyboardHints, PendingSubmit, Session, SessionStatus, Statistics,
    SubmitResult,
};
use crate::output::formatters::share_text;
use crate::source::{SourceError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Results delivered by background word source calls
#[derive(Debug)]
pub enum SourceEvent {
    Secret(Result<String, SourceError>),
    Validation(Result<bool, SourceError>),
}

/// Application state
pub struct App<S> {
    source: Arc<S>,
    config: GameConfig,
    pub session: Option<Session>,
    pending: Option<PendingSubmit>,
    pub loading: bool,
    pub invalid_guess: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    events_tx: UnboundedSender<SourceEvent>,
    events_rx: UnboundedReceiver<SourceEvent>,
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

impl<S: WordSource + 'static> App<S> {
    #[must_use]
    pub fn new(source: Arc<S>, config: GameConfig) -> Self {
        let (events_tx, events_rx) = unbounded_channel();

        Self {
            source,
            config,
            session: None,
            pending: None,
            loading: false,
            invalid_guess: false,
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries.",
                    config.answer_length, config.rounds
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            events_tx,
            events_rx,
        }
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// True while waiting on the word source
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.loading || self.session.as_ref().is_some_and(Session::is_busy)
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        self.session
            .as_ref()
            .map(|s| KeyboardHints::from_rows(s.history()))
            .unwrap_or_default()
    }

    /// Fetch a fresh secret on a background task
    ///
    /// Ignored while another source call is outstanding or a game is still
    /// being played.
    pub fn start_new_game(&mut self) {
        let in_progress = self
            .session
            .as_ref()
            .is_some_and(|s| !s.status().is_finished());
        if self.is_busy() || in_progress {
            return;
        }

        self.loading = true;
        self.invalid_guess = false;
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_word_of_day().await;
            // Receiver gone means the app already quit
            let _ = tx.send(SourceEvent::Secret(result));
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }

        let Some(session) = self.session.as_mut() else {
            match key.code {
                KeyCode::Char('n') => self.start_new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        };

        if session.status().is_finished() {
            match key.code {
                KeyCode::Char('n') => self.start_new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let outcome = match key.code {
            KeyCode::Char(c) => session.append_letter(c),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Enter => {
                self.submit();
                return;
            }
            _ => return,
        };

        match outcome {
            InputOutcome::Accepted => self.invalid_guess = false,
            InputOutcome::Busy => debug!("input ignored while checking word"),
            InputOutcome::Ignored | InputOutcome::Finished => {}
        }
    }

    fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let Some(pending) = session.begin_submit() else {
            if !session.is_busy() {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            return;
        };

        let candidate = pending.candidate().to_string();
        self.pending = Some(pending);

        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = source.check_valid_word(&candidate).await;
            let _ = tx.send(SourceEvent::Validation(result));
        });
    }

    /// Apply every source result that has arrived so far
    pub fn poll_source_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_source_event(event);
        }
    }

    /// Wait for the next source result
    pub async fn next_source_event(&mut self) -> Option<SourceEvent> {
        self.events_rx.recv().await
    }

    pub fn apply_source_event(&mut self, event: SourceEvent) {
        match event {
            SourceEvent::Secret(result) => self.apply_secret(result),
            SourceEvent::Validation(result) => self.apply_validation(result),
        }
    }

    fn apply_secret(&mut self, result: Result<String, SourceError>) {
        self.loading = false;

        let session = result
            .map_err(GameError::from)
            .and_then(|secret| Session::new(&secret, self.config));

        match session {
            Ok(session) => {
                self.session = Some(session);
                self.add_message("New game started. Good luck!", MessageStyle::Info);
            }
            Err(err) => {
                warn!(error = %err, "could not start game");
                self.session = None;
                self.add_message(
                    &format!("Could not start a game: {err}. Press 'n' to retry."),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn apply_validation(&mut self, result: Result<bool, SourceError>) {
        let (Some(session), Some(pending)) = (self.session.as_mut(), self.pending.take()) else {
            return;
        };

        match session.complete_submit(pending, result) {
            Ok(SubmitResult::InvalidWord) => {
                self.invalid_guess = true;
                let guess = session.guess().to_string();
                self.add_message(&format!("{guess} is not in the word list"), MessageStyle::Error);
            }
            Ok(SubmitResult::Evaluated { status, .. }) => self.finish_row(status),
            Ok(SubmitResult::NotReady) => {}
            Err(err) => {
                self.add_message(
                    &format!("Could not check the word: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn finish_row(&mut self, status: SessionStatus) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        match status {
            SessionStatus::InProgress => return,
            SessionStatus::Won => {
                let celebration = match session.row() {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SessionStatus::Lost => {
                let text = format!("The word was {}", session.secret());
                self.add_message(&text, MessageStyle::Error);
            }
        }

        if let Some(session) = self.session.as_ref() {
            self.stats.record(session);
            let summary = share_text(session);
            for line in summary.lines().filter(|l| !l.is_empty()) {
                self.add_message(line, MessageStyle::Info);
            }
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        let limit = self.config.rounds + 4;
        if self.messages.len() > limit {
            self.messages.drain(..self.messages.len() - limit);
        }
    }
}

/// Run the TUI application
///
/// The terminal loop blocks on input polling, so it runs on tokio's blocking
/// pool. Word source calls run on spawned tasks and report back through the
/// app's channel.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the terminal thread panics.
pub async fn run_tui<S: WordSource + 'static>(app: App<S>) -> Result<()> {
    tokio::task::spawn_blocking(move || run_terminal(app)).await?
}

fn run_terminal<S: WordSource + 'static>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource + 'static>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    app.start_new_game();

    loop {
        app.poll_source_events();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(INPUT_POLL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
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
    use crate::source::testing::StubSource;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word<S: WordSource + 'static>(app: &mut App<S>, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    async fn started(source: StubSource) -> App<StubSource> {
        let mut app = App::new(Arc::new(source), GameConfig::default());
        app.start_new_game();
        assert!(app.is_busy());
        let event = app.next_source_event().await.unwrap();
        app.apply_source_event(event);
        app
    }

    async fn settle<S: WordSource + 'static>(app: &mut App<S>) {
        let event = app.next_source_event().await.unwrap();
        app.apply_source_event(event);
    }

    #[tokio::test]
    async fn new_game_fetches_secret() {
        let app = started(StubSource::new("crane", &["crane"])).await;
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.secret().text(), "CRANE");
        assert!(!app.is_busy());
    }

    #[tokio::test]
    async fn malformed_secret_blocks_play() {
        let app = started(StubSource::new("cr4ne", &[])).await;
        assert!(app.session.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[tokio::test]
    async fn typing_is_rejected_while_checking() {
        let mut app = started(StubSource::new("crane", &["crate"])).await;
        type_word(&mut app, "crate");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.is_busy());
        app.handle_key(key(KeyCode::Backspace));
        type_word(&mut app, "zz");
        assert_eq!(app.session.as_ref().unwrap().guess().as_str(), "CRATE");

        settle(&mut app).await;
        let session = app.session.as_ref().unwrap();
        assert!(!app.is_busy());
        assert_eq!(session.row(), 1);
        assert!(session.guess().is_empty());
    }

    #[tokio::test]
    async fn invalid_word_is_flagged_until_edited() {
        let mut app = started(StubSource::new("crane", &[])).await;
        type_word(&mut app, "qwert");
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app).await;

        assert!(app.invalid_guess);
        assert_eq!(app.session.as_ref().unwrap().row(), 0);

        app.handle_key(key(KeyCode::Backspace));
        assert!(!app.invalid_guess);
    }

    #[tokio::test]
    async fn short_guess_reports_error() {
        let mut app = started(StubSource::new("crane", &["crane"])).await;
        type_word(&mut app, "cra");
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.is_busy());
        assert_eq!(app.messages.last().unwrap().text, "Not enough letters");
    }

    #[tokio::test]
    async fn source_failure_keeps_guess() {
        let mut app = started(StubSource::failing("crane")).await;
        type_word(&mut app, "crate");
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app).await;

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.guess().as_str(), "CRATE");
        assert!(!session.is_busy());
        assert!(
            app.messages
                .last()
                .unwrap()
                .text
                .starts_with("Could not check the word")
        );
    }

    #[tokio::test]
    async fn win_records_stats_and_allows_new_game() {
        let mut app = started(StubSource::new("crane", &["crane"])).await;
        type_word(&mut app, "crane");
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app).await;

        assert_eq!(
            app.session.as_ref().unwrap().status(),
            SessionStatus::Won
        );
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.keyboard_hints().get('C'), Some(crate::core::Verdict::Correct));

        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.loading);
        settle(&mut app).await;
        assert_eq!(app.session.as_ref().unwrap().row(), 0);
    }

    #[tokio::test]
    async fn new_game_key_ignored_mid_game() {
        let mut app = started(StubSource::new("crane", &["crane"])).await;
        app.handle_key(key(KeyCode::Char('n')));
        assert!(!app.loading);
        assert_eq!(app.session.as_ref().unwrap().guess().as_str(), "N");
    }

    #[tokio::test]
    async fn q_quits_when_no_game_could_start() {
        let mut app = started(StubSource::new("cr4ne", &[])).await;
        assert!(app.session.is_none());

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn modified_letters_are_not_typed() {
        let mut app = started(StubSource::new("crane", &["crane"])).await;
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));

        assert_eq!(app.session.as_ref().unwrap().guess().as_str(), "C");
        assert!(!app.should_quit);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_loop_receives_background_results() {
        let source = Arc::new(StubSource::new("crane", &["crane"]));

        let app = tokio::task::spawn_blocking(move || {
            let mut app = App::new(source, GameConfig::default());
            app.start_new_game();
            for _ in 0..200 {
                app.poll_source_events();
                if app.session.is_some() {
                    break;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
            app
        })
        .await
        .unwrap();

        assert!(!app.loading);
        assert_eq!(app.session.as_ref().unwrap().secret().text(), "CRANE");
    }

    #[test]
    fn escape_quits() {
        let mut app = App::new(
            Arc::new(StubSource::new("crane", &[])),
            GameConfig::default(),
        );
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
