//! Per-run play statistics (kept in memory only)

use super::{Session, SessionStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of guesses taken (index 0 unused)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; unfinished sessions are ignored
    pub fn record(&mut self, session: &Session) {
        match session.status() {
            SessionStatus::InProgress => {}
            SessionStatus::Lost => self.total_games += 1,
            SessionStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;

                let guesses = session.row();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
