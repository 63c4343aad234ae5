//! tictactoe - unified CLI

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Command, Config, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command_or_play() {
        Command::Play => tui::run_tui(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Prints the board reached by `moves`; stdout carries only the result.
fn run_replay(config: &Config, moves: &[String]) -> Result<()> {
    logging::init_stderr(config);

    info!(count = moves.len(), "Replaying moves");
    let positions = replay::parse_moves(moves)?;
    let state = replay::replay(&positions)?;
    println!("{}", replay::render(&state));
    Ok(())
}
