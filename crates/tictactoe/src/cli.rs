//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a local two-player game in the terminal UI
    Play,

    /// Apply moves without the UI and print the resulting board
    Replay {
        /// Moves in order: board indices 0-8 or labels like `center`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command_or_play(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_plays() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command_or_play(), Command::Play);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_collects_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "4", "top-left", "8"]).unwrap();
        assert_eq!(
            cli.command_or_play(),
            Command::Replay {
                moves: vec!["4".into(), "top-left".into(), "8".into()],
            }
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--config", "my.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
