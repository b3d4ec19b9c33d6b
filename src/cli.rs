use crate::debug_log;
use crate::engine::{
    DEFAULT_ATTEMPT_LIMIT, DEFAULT_CODE_LENGTH, DEFAULT_MAX_DIGIT_VALUE, DEFAULT_MIN_DIGIT_VALUE,
    GameConfiguration, GuessAttemptResult, RoundStartResult,
};
use crate::game_state::{GameInterface, UserAction};
use crate::scoring::ScoringPolicy;
use clap::Parser;
use std::io::BufRead;

/// Mastermind CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of digits in the secret code
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    /// Maximum number of guesses per round
    #[arg(short = 'a', long = "attempts", default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    pub attempt_limit: u32,

    /// Smallest digit value
    #[arg(long = "min", default_value_t = DEFAULT_MIN_DIGIT_VALUE)]
    pub min_digit_value: u8,

    /// Upper digit bound; generated codes stay below it
    #[arg(long = "max", default_value_t = DEFAULT_MAX_DIGIT_VALUE)]
    pub max_digit_value: u8,

    /// Seed for reproducible codes
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Credit each code digit at most once when scoring
    #[arg(long = "classic")]
    pub classic: bool,
}

impl Cli {
    pub fn to_config(&self) -> GameConfiguration {
        GameConfiguration {
            code_length: self.code_length,
            min_digit_value: self.min_digit_value,
            max_digit_value: self.max_digit_value,
            attempt_limit: self.attempt_limit,
            scoring_policy: if self.classic {
                ScoringPolicy::Classic
            } else {
                ScoringPolicy::PositionIndex
            },
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter your guess (or 'exit' to quit, or 'next' to start a new round):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return Some(UserAction::Exit),
        Ok(_) => {}
        Err(e) => {
            debug_log!("read_guess() - read error: {}", e);
            return Some(UserAction::Exit);
        }
    }
    let input = input.trim();

    match input.to_uppercase().as_str() {
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewRound),
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

pub fn display_round_start(start: &RoundStartResult) {
    println!("{}", start.message);
}

pub fn display_attempt(result: &GuessAttemptResult) {
    if !result.scoring.is_empty() {
        println!("[{}]", result.scoring);
    }
    println!("{}", result.message);
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_new_round_message() {
    println!("New round started.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round_start(&mut self, start: &RoundStartResult) {
        display_round_start(start);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        read_guess(&mut self.reader)
    }

    fn display_attempt(&mut self, result: &GuessAttemptResult) {
        display_attempt(result);
    }

    fn display_new_round(&mut self) {
        display_new_round_message();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
