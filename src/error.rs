/// Reasons a submitted guess was not scored.
///
/// These never escape as `Err`; the engine reports them through
/// [`GuessAttemptResult`](crate::engine::GuessAttemptResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("attempt limit exceeded")]
    AttemptLimitExceeded,

    #[error("invalid guess value")]
    InvalidGuessFormat { expected: usize, actual: usize },

    #[error("invalid guess character '{character}' at position {position}")]
    InvalidGuessCharacter { character: char, position: usize },

    #[error("no round in progress")]
    NoActiveRound,
}

/// Errors raised while configuring the engine or starting a round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid code: {0}")]
    InvalidCode(String),
}
