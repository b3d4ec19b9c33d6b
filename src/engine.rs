//! The Mastermind game engine.
//!
//! [`GameEngine`] owns the configuration, the secret code for the current
//! round and the attempt countdown. Callers drive it with
//! [`GameEngine::start_round`] and [`GameEngine::submit_guess`] and display
//! the returned values; nothing here does I/O.
//!
//! Two bound conventions are in play and kept deliberately apart:
//! generated digits come from `min..max` (upper bound exclusive), while a
//! guess digit counts as in range over `min..=max`.

use crate::code::SecretCode;
use crate::error::{ConfigError, GuessError};
use crate::scoring::{self, ScoringPolicy};
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

pub const DEFAULT_CODE_LENGTH: usize = 4;
pub const DEFAULT_MIN_DIGIT_VALUE: u8 = 1;
pub const DEFAULT_MAX_DIGIT_VALUE: u8 = 6;
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 10;
/// Digits are typed one character each, so codes can only use 0-9.
pub const MAX_DIGIT_BOUND: u8 = 10;

const READY_STATUS: &str = "Ready to start to play";

/// Engine settings. Everything except `code_length` can be changed through
/// the engine's setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfiguration {
    pub code_length: usize,
    pub min_digit_value: u8,
    pub max_digit_value: u8,
    pub attempt_limit: u32,
    pub scoring_policy: ScoringPolicy,
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            min_digit_value: DEFAULT_MIN_DIGIT_VALUE,
            max_digit_value: DEFAULT_MAX_DIGIT_VALUE,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            scoring_policy: ScoringPolicy::default(),
        }
    }
}

impl GameConfiguration {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::Validation(
                "code_length must be > 0".into(),
            ));
        }
        if self.attempt_limit == 0 {
            return Err(ConfigError::Validation(
                "attempt_limit must be > 0".into(),
            ));
        }
        if self.min_digit_value >= self.max_digit_value {
            return Err(ConfigError::Validation(format!(
                "min_digit_value ({}) must be less than max_digit_value ({})",
                self.min_digit_value, self.max_digit_value
            )));
        }
        if self.max_digit_value > MAX_DIGIT_BOUND {
            return Err(ConfigError::Validation(format!(
                "max_digit_value must be <= {MAX_DIGIT_BOUND}"
            )));
        }
        Ok(())
    }

    /// Digits a guess may contain and still be looked up in the code.
    pub fn guess_range(&self) -> RangeInclusive<u8> {
        self.min_digit_value..=self.max_digit_value
    }
}

/// Snapshot of the current configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSettings {
    pub code_length: usize,
    pub min_digit_value: u8,
    pub max_digit_value: u8,
    pub attempt_limit: u32,
    pub scoring_policy: ScoringPolicy,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStartResult {
    pub attempts_remaining: u32,
    pub message: String,
}

/// Outcome of one call to [`GameEngine::submit_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttemptResult {
    pub attempts_remaining: u32,
    /// One marker per position, or empty when the guess was rejected.
    pub scoring: String,
    pub has_won: bool,
    pub error: Option<GuessError>,
    pub message: String,
}

impl GuessAttemptResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True once no further guess can make progress in this round.
    pub fn is_round_over(&self) -> bool {
        self.has_won || self.attempts_remaining == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub attempts_remaining: u32,
    pub has_won: bool,
}

#[derive(Debug)]
struct Round {
    code: SecretCode,
    state: RoundState,
}

#[derive(Debug)]
pub struct GameEngine {
    config: GameConfiguration,
    rng: ChaCha8Rng,
    seed: u64,
    round: Option<Round>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Engine with default settings and an entropy-derived seed.
    pub fn new() -> Self {
        Self::build(GameConfiguration::default(), rand::random())
    }

    /// Engine with default settings whose codes are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfiguration::default(), seed)
    }

    pub fn with_config(config: GameConfiguration) -> Result<Self, ConfigError> {
        Self::with_config_and_seed(config, rand::random())
    }

    pub fn with_config_and_seed(config: GameConfiguration, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfiguration, seed: u64) -> Self {
        debug_log!("GameEngine::build() - seed {}, config {:?}", seed, config);
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            round: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    /// Set the attempt limit. The current countdown restarts from the new limit.
    pub fn set_attempt_limit(&mut self, attempt_limit: u32) {
        self.config.attempt_limit = attempt_limit;
        if let Some(round) = self.round.as_mut() {
            round.state.attempts_remaining = attempt_limit;
        }
    }

    pub fn set_min_digit_value(&mut self, min_digit_value: u8) {
        self.config.min_digit_value = min_digit_value;
    }

    pub fn set_max_digit_value(&mut self, max_digit_value: u8) {
        self.config.max_digit_value = max_digit_value;
    }

    pub fn set_scoring_policy(&mut self, scoring_policy: ScoringPolicy) {
        self.config.scoring_policy = scoring_policy;
    }

    pub fn settings(&self) -> RoundSettings {
        RoundSettings {
            code_length: self.config.code_length,
            min_digit_value: self.config.min_digit_value,
            max_digit_value: self.config.max_digit_value,
            attempt_limit: self.config.attempt_limit,
            scoring_policy: self.config.scoring_policy,
            message: READY_STATUS.to_string(),
        }
    }

    pub fn round_state(&self) -> Option<RoundState> {
        self.round.as_ref().map(|r| r.state)
    }

    /// The code of a finished round. Hidden while the round is in play.
    pub fn revealed_code(&self) -> Option<&SecretCode> {
        self.round
            .as_ref()
            .filter(|r| r.state.has_won || r.state.attempts_remaining == 0)
            .map(|r| &r.code)
    }

    /// Generate a fresh code and reset the countdown.
    pub fn start_round(&mut self) -> Result<RoundStartResult, ConfigError> {
        self.config.validate()?;
        let code = SecretCode::generate(
            self.config.code_length,
            self.config.min_digit_value,
            self.config.max_digit_value,
            &mut self.rng,
        );
        Ok(self.begin(code))
    }

    /// Start a round with a chosen code instead of a random one.
    ///
    /// Each digit must lie in `min..=max`, the same range guesses are checked
    /// against.
    pub fn start_round_with(&mut self, code: SecretCode) -> Result<RoundStartResult, ConfigError> {
        self.config.validate()?;
        if code.len() != self.config.code_length {
            return Err(ConfigError::InvalidCode(format!(
                "expected {} digits, got {}",
                self.config.code_length,
                code.len()
            )));
        }
        let range = self.config.guess_range();
        if let Some(digit) = code.digits().iter().find(|d| !range.contains(d)) {
            return Err(ConfigError::InvalidCode(format!(
                "digit {digit} is outside {}..={}",
                range.start(),
                range.end()
            )));
        }
        Ok(self.begin(code))
    }

    fn begin(&mut self, code: SecretCode) -> RoundStartResult {
        let attempts_remaining = self.config.attempt_limit;
        info_log!(
            "Round started: {} digits, {} attempts",
            code.len(),
            attempts_remaining
        );
        self.round = Some(Round {
            code,
            state: RoundState {
                attempts_remaining,
                has_won: false,
            },
        });
        RoundStartResult {
            attempts_remaining,
            message: self.instructions(),
        }
    }

    fn instructions(&self) -> String {
        format!(
            "Code generated. Guess the {} digit code; each digit is between {} and {} and digits may repeat. \
             '+' marks a correct digit in the correct position, '-' a correct digit in the wrong position. \
             You have {} attempts.",
            self.config.code_length,
            self.config.min_digit_value,
            self.config.max_digit_value - 1,
            self.config.attempt_limit
        )
    }

    /// Consume one attempt and score `guess`.
    ///
    /// An attempt is used even when the guess is malformed. Calls with no
    /// round or with no attempts left change nothing. A win is kept for the
    /// rest of the round.
    pub fn submit_guess(&mut self, guess: &str) -> GuessAttemptResult {
        let config = &self.config;
        let Some(round) = self.round.as_mut() else {
            return rejected(0, GuessError::NoActiveRound);
        };
        let state = &mut round.state;

        if state.attempts_remaining == 0 {
            debug_log!("submit_guess() - no attempts left");
            return rejected(0, GuessError::AttemptLimitExceeded);
        }

        state.attempts_remaining -= 1;

        let digits = match scoring::parse_guess(guess, config.code_length) {
            Ok(digits) => digits,
            Err(err) => {
                debug_log!("submit_guess() - rejected {:?}: {}", guess, err);
                return rejected(state.attempts_remaining, err);
            }
        };

        let marks = config
            .scoring_policy
            .score(&round.code, &digits, &config.guess_range());
        state.has_won |= scoring::is_win(&marks);

        let message = if state.has_won {
            info_log!("Round won with {} attempts left", state.attempts_remaining);
            "You won.".to_string()
        } else if state.attempts_remaining == 0 {
            info_log!("Round lost");
            format!("You have lost. The code was {}.", round.code)
        } else {
            attempts_left_message(state.attempts_remaining)
        };

        GuessAttemptResult {
            attempts_remaining: state.attempts_remaining,
            scoring: scoring::marks_to_string(&marks),
            has_won: state.has_won,
            error: None,
            message,
        }
    }
}

fn attempts_left_message(attempts_remaining: u32) -> String {
    format!("You have {attempts_remaining} attempts left.")
}

fn rejected(attempts_remaining: u32, error: GuessError) -> GuessAttemptResult {
    GuessAttemptResult {
        attempts_remaining,
        scoring: String::new(),
        has_won: false,
        message: format!("{error}. {}", attempts_left_message(attempts_remaining)),
        error: Some(error),
    }
}
