// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod cli;
pub mod code;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scoring;

// Re-export commonly used items for easier testing
pub use code::SecretCode;
pub use engine::{
    GameConfiguration, GameEngine, GuessAttemptResult, RoundSettings, RoundStartResult,
    RoundState,
};
pub use error::{ConfigError, GuessError};
pub use game_state::{GameInterface, RoundOutcome, UserAction, game_loop};
pub use scoring::{Mark, ScoringPolicy, score_guess, score_guess_classic};
