//! Guessing Games - terminal front end for Mastermind and Wheel of Fortune.

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use dumb_guesser::DumbGuesser;
use guessing_core::console::StdConsole;
use guessing_core::mastermind::Mastermind;
use guessing_core::wheel::{WheelOfFortuneAIGame, WheelOfFortuneUserGame};
use guessing_core::{play_all, GuessStrategy};
use smart_guesser::SmartGuesser;
use smarter_guesser::SmarterGuesser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let top = cli.command.top();

    let (title, ledger) = match cli.command {
        Command::Mastermind {
            code_file,
            code_length,
            max_rounds,
            max_guesses,
            ..
        } => {
            let config = cli::mastermind_config(code_file, code_length, max_rounds, max_guesses);
            let mut game = Mastermind::new(&config, StdConsole);
            ("Mastermind Game Results:", play_all(&mut game)?)
        }
        Command::Wheel {
            phrase_file,
            max_incorrect,
            seed,
            ..
        } => {
            let config = cli::wheel_config(phrase_file, max_incorrect, seed);
            let mut game = WheelOfFortuneUserGame::new(&config, StdConsole);
            ("Wheel of Fortune Results:", play_all(&mut game)?)
        }
        Command::WheelAi {
            phrase_file, seed, ..
        } => {
            let config = cli::wheel_ai_config(phrase_file);
            let mut game = WheelOfFortuneAIGame::from_config(&config, guessers(seed));
            info!(players = ?game.player_ids(), "starting AI session");
            ("Wheel of Fortune AI Results:", play_all(&mut game)?)
        }
    };

    report::print(title, &ledger.summary(top), cli.json)
}

/// The three automated players, seeded one apart when a seed is given.
fn guessers(seed: Option<u64>) -> Vec<Box<dyn GuessStrategy>> {
    let (dumb, smart) = match seed {
        Some(seed) => (
            DumbGuesser::with_seed(seed),
            SmartGuesser::with_seed(seed.wrapping_add(1)),
        ),
        None => (DumbGuesser::new(), SmartGuesser::new()),
    };
    vec![
        Box::new(dumb),
        Box::new(smart),
        Box::new(SmarterGuesser::new()),
    ]
}
