//! Session configuration

/// Default number of letters in the secret
pub const ANSWER_LENGTH: usize = 5;

/// Default number of attempts per game
pub const ROUNDS: usize = 6;

/// Shape of a game: word length and number of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub answer_length: usize,
    pub rounds: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(answer_length: usize, rounds: usize) -> Self {
        Self {
            answer_length,
            rounds,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(ANSWER_LENGTH, ROUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_six() {
        let config = GameConfig::default();
        assert_eq!(config.answer_length, 5);
        assert_eq!(config.rounds, 6);
    }
}
