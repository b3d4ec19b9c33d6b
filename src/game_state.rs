use crate::engine::{GameEngine, GuessAttemptResult, RoundStartResult};
use crate::error::ConfigError;
use crate::info_log;

/// What the player asked for at the guess prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewRound,
    Exit,
}

/// How a call to [`game_loop`] finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts_used: u32 },
    Lost { code: String },
    Exited,
}

/// Front end the game loop talks to.
///
/// Implemented by [`CliInterface`](crate::cli::CliInterface); tests and other
/// front ends can supply their own.
pub trait GameInterface {
    fn display_round_start(&mut self, start: &RoundStartResult);
    /// `None` means the input could not be used and the prompt should repeat.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_attempt(&mut self, result: &GuessAttemptResult);
    fn display_new_round(&mut self);
    fn display_exit_message(&mut self);
}

/// Play rounds on `engine` until one is won, lost or the player exits.
pub fn game_loop<I: GameInterface + ?Sized>(
    engine: &mut GameEngine,
    interface: &mut I,
) -> Result<RoundOutcome, ConfigError> {
    let start = engine.start_round()?;
    interface.display_round_start(&start);

    loop {
        let guess = match interface.read_guess() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                return Ok(RoundOutcome::Exited);
            }
            Some(UserAction::NewRound) => {
                let start = engine.start_round()?;
                interface.display_new_round();
                interface.display_round_start(&start);
                continue;
            }
            Some(UserAction::Guess(guess)) => guess,
            None => continue,
        };

        let result = engine.submit_guess(&guess);
        interface.display_attempt(&result);

        if result.has_won {
            let attempts_used = engine.config().attempt_limit - result.attempts_remaining;
            info_log!("game_loop() - won after {} attempts", attempts_used);
            return Ok(RoundOutcome::Won { attempts_used });
        }
        if result.is_round_over() {
            let code = engine
                .revealed_code()
                .map(ToString::to_string)
                .unwrap_or_default();
            return Ok(RoundOutcome::Lost { code });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::SecretCode;
    use std::collections::VecDeque;

    /// Scripted front end that records what the loop showed it.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        starts: usize,
        new_rounds: usize,
        attempts: Vec<GuessAttemptResult>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_round_start(&mut self, _start: &RoundStartResult) {
            self.starts += 1;
        }

        fn read_guess(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_attempt(&mut self, result: &GuessAttemptResult) {
            self.attempts.push(result.clone());
        }

        fn display_new_round(&mut self) {
            self.new_rounds += 1;
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn guess(text: &str) -> Option<UserAction> {
        Some(UserAction::Guess(text.to_string()))
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut engine = GameEngine::with_seed(1);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        let outcome = game_loop(&mut engine, &mut interface).unwrap();
        assert_eq!(outcome, RoundOutcome::Exited);
        assert!(interface.exited);
        assert_eq!(interface.starts, 1);
    }

    #[test]
    fn test_game_loop_unreadable_input_does_not_consume() {
        let mut engine = GameEngine::with_seed(1);
        let mut interface = ScriptedInterface::new(vec![None, None, Some(UserAction::Exit)]);
        game_loop(&mut engine, &mut interface).unwrap();
        assert!(interface.attempts.is_empty());
        assert_eq!(engine.round_state().unwrap().attempts_remaining, 10);
    }

    #[test]
    fn test_game_loop_lost() {
        let mut engine = GameEngine::with_seed(1);
        engine.set_attempt_limit(3);
        let mut interface = ScriptedInterface::new(vec![guess("9999"); 3]);
        let outcome = game_loop(&mut engine, &mut interface).unwrap();
        let code = engine.revealed_code().unwrap().to_string();
        assert_eq!(outcome, RoundOutcome::Lost { code });
        assert_eq!(interface.attempts.len(), 3);
        assert!(!interface.exited);
    }

    #[test]
    fn test_game_loop_won() {
        let mut engine = GameEngine::with_seed(1);
        let mut interface = ScriptedInterface::new(vec![guess("12"), guess("5555")]);
        // Peek at the code the loop will generate by replaying the seed.
        let mut probe = GameEngine::with_seed(1);
        probe.start_round().unwrap();
        probe.set_attempt_limit(1);
        probe.submit_guess("0000");
        let code = probe.revealed_code().unwrap().to_string();
        interface.actions.push_back(guess(&code));

        let outcome = game_loop(&mut engine, &mut interface).unwrap();
        if code == "5555" {
            assert_eq!(outcome, RoundOutcome::Won { attempts_used: 2 });
        } else {
            assert_eq!(outcome, RoundOutcome::Won { attempts_used: 3 });
        }
        assert!(interface.attempts[0].is_error());
    }

    #[test]
    fn test_game_loop_new_round_restarts_countdown() {
        let mut engine = GameEngine::with_seed(1);
        let mut interface = ScriptedInterface::new(vec![
            guess("9999"),
            Some(UserAction::NewRound),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut engine, &mut interface).unwrap();
        assert_eq!(interface.new_rounds, 1);
        assert_eq!(interface.starts, 2);
        assert_eq!(engine.round_state().unwrap().attempts_remaining, 10);
    }

    #[test]
    fn test_game_loop_invalid_config() {
        let mut engine = GameEngine::with_seed(1);
        engine.set_max_digit_value(1);
        let mut interface = ScriptedInterface::new(vec![]);
        assert!(game_loop(&mut engine, &mut interface).is_err());
        assert_eq!(interface.starts, 0);
    }

    #[test]
    fn test_game_loop_starts_fresh_round() {
        // game_loop always starts its own round; a preset code is replaced.
        let mut engine = GameEngine::with_seed(1);
        engine
            .start_round_with(SecretCode::parse("1111").unwrap())
            .unwrap();
        engine.submit_guess("2222");
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut engine, &mut interface).unwrap();
        assert_eq!(engine.round_state().unwrap().attempts_remaining, 10);
    }
}
