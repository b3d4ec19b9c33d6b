use mastermind::cli::{CliInterface, parse_cli};
use mastermind::{GameEngine, RoundOutcome, debug_log, game_loop, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();

    let config = cli.to_config();
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_config_and_seed(config, seed),
        None => GameEngine::with_config(config),
    };
    let mut engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug_log!("Using seed {}", engine.seed());

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    match game_loop(&mut engine, &mut interface) {
        Ok(RoundOutcome::Won { attempts_used }) => {
            println!("Solved in {attempts_used} attempts.");
            ExitCode::SUCCESS
        }
        Ok(RoundOutcome::Lost { .. } | RoundOutcome::Exited) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to start a round: {e}");
            ExitCode::FAILURE
        }
    }
}
